//! Opens the Linux bus devices and hands back initialised drivers.

use anyhow::Context;
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::{I2cdev, SpidevDevice};
use thermodisplay_adapter_max31855::Max31855;
use thermodisplay_adapter_ssd1306::{I2cPanel, OledPanel};

use crate::config::{DisplayConfig, SensorConfig};

pub type Sensor = Max31855<SpidevDevice>;
pub type Panel = I2cPanel<I2cdev>;

/// Open the `spidev` node the MAX31855 sits on.
///
/// The chip is read-only, clocked in SPI mode 0, 8-bit words.
pub fn open_sensor(config: &SensorConfig) -> anyhow::Result<Sensor> {
    let mut spi = SpidevDevice::open(&config.spi_device)
        .with_context(|| format!("unable to open SPI device {}", config.spi_device))?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(config.spi_speed_hz)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.0
        .configure(&options)
        .with_context(|| format!("unable to configure SPI device {}", config.spi_device))?;
    tracing::info!(
        device = %config.spi_device,
        speed_hz = config.spi_speed_hz,
        "thermocouple amplifier ready"
    );
    Ok(Max31855::new(spi))
}

/// Open the `i2c-dev` node and power the panel up.
pub fn open_panel(config: &DisplayConfig) -> anyhow::Result<Panel> {
    let i2c = I2cdev::new(&config.i2c_device)
        .with_context(|| format!("unable to open I2C device {}", config.i2c_device))?;
    let mut panel = OledPanel::new(i2c, config.address)?;
    panel.init().with_context(|| {
        format!(
            "display not responding at {:#04x} on {}",
            config.address, config.i2c_device
        )
    })?;
    tracing::info!(
        device = %config.i2c_device,
        address = config.address,
        "display ready"
    );
    Ok(panel)
}
