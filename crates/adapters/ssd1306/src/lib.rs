//! # thermodisplay-adapter-ssd1306
//!
//! Display adapter for 128×64 SSD1306 OLED panels on I²C.
//!
//! Wraps the `ssd1306` driver in buffered-graphics mode: drawing only
//! touches the in-memory buffer and [`DisplayPanel::flush`] sends the
//! changed area to the panel.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `thermodisplay-app` only.

mod error;

pub use error::PanelError;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Size};
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{
    DisplayConfig, DisplayRotation, DisplaySize128x64, I2CInterface, WriteOnlyDataCommand,
};
use ssd1306::{I2CDisplayInterface, Ssd1306};
use thermodisplay_app::ports::DisplayPanel;

/// Default 7-bit address (SA0 low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

type Driver<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// SSD1306 panel on an I²C bus.
pub type I2cPanel<I2C> = OledPanel<I2CInterface<I2C>>;

/// 128×64 SSD1306 panel with its frame buffer.
pub struct OledPanel<DI> {
    display: Driver<DI>,
}

impl<I2C: I2c> OledPanel<I2CInterface<I2C>> {
    /// Wrap an I²C bus. Call [`init`](Self::init) before the first flush.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidAddress`] when `address` does not fit
    /// in 7 bits.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, PanelError> {
        if address > 0x7F {
            return Err(PanelError::InvalidAddress(address));
        }
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Ok(Self { display })
    }
}

impl<DI: WriteOnlyDataCommand> OledPanel<DI> {
    /// Run the power-on sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Interface`] when the panel does not acknowledge.
    pub fn init(&mut self) -> Result<(), PanelError> {
        self.display.init().map_err(PanelError::Interface)?;
        tracing::debug!("SSD1306 initialised");
        Ok(())
    }
}

impl<DI: WriteOnlyDataCommand> OriginDimensions for OledPanel<DI> {
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl<DI: WriteOnlyDataCommand> DrawTarget for OledPanel<DI> {
    type Color = BinaryColor;
    type Error = PanelError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display
            .draw_iter(pixels)
            .map_err(PanelError::Interface)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.display.clear(color).map_err(PanelError::Interface)
    }
}

impl<DI: WriteOnlyDataCommand> DisplayPanel for OledPanel<DI> {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.display.flush().map_err(PanelError::Interface)
    }
}
