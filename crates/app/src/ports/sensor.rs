//! Sensor port — a thermocouple amplifier that can be asked for one value.

use thermodisplay_domain::error::Fault;

/// A temperature source.
pub trait TemperatureSensor {
    /// Read the current thermocouple temperature in degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns a [`Fault`] when the sensor reports a wiring problem or the
    /// read cannot be completed. Faults are recovered by the caller.
    fn read_celsius(&mut self) -> Result<f64, Fault>;
}
