//! # thermodisplay-adapter-max31855
//!
//! Sensor adapter for the MAX31855 cold-junction compensated thermocouple
//! amplifier.
//!
//! ## How it works
//!
//! The MAX31855 is read-only: every chip-select cycle clocks out one 32-bit
//! word holding the latest conversion, the die temperature and three latched
//! fault bits. The adapter reads that word through any
//! [`embedded_hal::spi::SpiDevice`] and turns it into a Celsius value or a
//! classified [`Fault`].
//!
//! ## Bus settings
//!
//! SPI mode 0, up to 5 MHz, 8-bit words. Only MISO is used.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `thermodisplay-app` and `thermodisplay-domain`.

mod decode;
mod error;

pub use decode::{Sample, decode};
pub use error::{FaultCondition, Max31855Error};

use embedded_hal::spi::SpiDevice;
use thermodisplay_app::ports::TemperatureSensor;
use thermodisplay_domain::error::Fault;

/// MAX31855 on an SPI bus.
pub struct Max31855<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Max31855<SPI> {
    /// Wrap an SPI device whose chip select is wired to the MAX31855.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Clock out the raw 32-bit word.
    ///
    /// # Errors
    ///
    /// Returns [`Max31855Error::Spi`] when the transfer fails.
    pub fn read_raw(&mut self) -> Result<[u8; 4], Max31855Error<SPI::Error>> {
        let mut buf = [0u8; 4];
        self.spi.read(&mut buf).map_err(Max31855Error::Spi)?;
        Ok(buf)
    }

    /// Read and decode one conversion.
    ///
    /// # Errors
    ///
    /// Returns [`Max31855Error::Spi`] when the transfer fails, or
    /// [`Max31855Error::Condition`] when the chip latched a fault.
    pub fn read(&mut self) -> Result<Sample, Max31855Error<SPI::Error>> {
        let raw = self.read_raw()?;
        let sample = decode(raw)?;
        tracing::trace!(
            raw = u32::from_be_bytes(raw),
            cold_junction = sample.cold_junction_celsius,
            "MAX31855 sample"
        );
        Ok(sample)
    }
}

impl<SPI: SpiDevice> TemperatureSensor for Max31855<SPI> {
    fn read_celsius(&mut self) -> Result<f64, Fault> {
        match self.read() {
            Ok(sample) => Ok(sample.thermocouple_celsius),
            Err(err) => {
                tracing::debug!(%err, "MAX31855 read failed");
                Err(err.into_fault())
            }
        }
    }
}
