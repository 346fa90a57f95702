//! Temperature reading — one sample and the instant it was captured.

use crate::time::Timestamp;

/// Convert degrees Celsius to degrees Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// A single thermocouple sample. Built fresh every poll, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature_celsius: f64,
    pub captured_at: Timestamp,
}

impl Reading {
    #[must_use]
    pub fn new(temperature_celsius: f64, captured_at: Timestamp) -> Self {
        Self {
            temperature_celsius,
            captured_at,
        }
    }

    #[must_use]
    pub fn fahrenheit(&self) -> f64 {
        celsius_to_fahrenheit(self.temperature_celsius)
    }
}
