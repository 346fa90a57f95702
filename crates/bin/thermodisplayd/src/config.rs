//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `thermodisplay.toml` in the working directory. Every field has
//! a default matching the reference wiring (MAX31855 on `/dev/spidev0.0`,
//! SSD1306 at `0x3C` on `/dev/i2c-1`, 5 s cadence), so the file is optional.
//! Environment variables take precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thermocouple amplifier settings.
    pub sensor: SensorConfig,
    /// OLED panel settings.
    pub display: DisplayConfig,
    /// Loop cadence.
    pub monitor: MonitorConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// MAX31855 bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// `spidev` character device, chip select included.
    pub spi_device: String,
    /// SPI clock in Hz (the MAX31855 tops out at 5 MHz).
    pub spi_speed_hz: u32,
}

/// SSD1306 bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `i2c-dev` character device.
    pub i2c_device: String,
    /// 7-bit panel address.
    pub address: u8,
}

/// Control loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Delay between two readings, in seconds.
    pub interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

const MAX_SPI_SPEED_HZ: u32 = 5_000_000;

impl Config {
    /// Load configuration from `thermodisplay.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("thermodisplay.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("THERMODISPLAY_SPI_DEVICE") {
            self.sensor.spi_device = val;
        }
        if let Ok(val) = std::env::var("THERMODISPLAY_I2C_DEVICE") {
            self.display.i2c_device = val;
        }
        if let Ok(val) = std::env::var("THERMODISPLAY_INTERVAL_SECS") {
            if let Ok(secs) = val.parse() {
                self.monitor.interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("THERMODISPLAY_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "interval_secs must be non-zero".to_string(),
            ));
        }
        if self.display.address > 0x7F {
            return Err(ConfigError::Validation(format!(
                "display address {:#04x} is not a 7-bit I2C address",
                self.display.address
            )));
        }
        if self.sensor.spi_speed_hz == 0 || self.sensor.spi_speed_hz > MAX_SPI_SPEED_HZ {
            return Err(ConfigError::Validation(format!(
                "spi_speed_hz must be between 1 and {MAX_SPI_SPEED_HZ}"
            )));
        }
        Ok(())
    }

    /// Delay between two readings.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.monitor.interval_secs)
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            spi_device: "/dev/spidev0.0".to_string(),
            spi_speed_hz: 1_000_000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_device: "/dev/i2c-1".to_string(),
            address: 0x3C,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "thermodisplayd=info,thermodisplay_app=info,thermodisplay_adapter_max31855=info,thermodisplay_adapter_ssd1306=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
