//! Console report lines, one per cycle plus the start and exit notices.

use crate::error::Fault;
use crate::reading::Reading;

/// Printed once before the first cycle.
pub const STARTUP_LINES: [&str; 2] = ["Starting thermocouple display...", "Press Ctrl+C to exit"];

/// Printed once on interrupt. Nothing is printed after it.
pub const SHUTDOWN_LINE: &str = "Exiting...";

/// `YYYY-MM-DD HH:MM:SS - Temperature: <F>°F (<C>°C)`
#[must_use]
pub fn reading_line(reading: &Reading) -> String {
    format!(
        "{} - Temperature: {:.1}\u{b0}F ({:.1}\u{b0}C)",
        reading.captured_at.format("%Y-%m-%d %H:%M:%S"),
        reading.fahrenheit(),
        reading.temperature_celsius,
    )
}

/// `Sensor error: <raw message>`
#[must_use]
pub fn fault_line(fault: &Fault) -> String {
    format!("Sensor error: {}", fault.message())
}
