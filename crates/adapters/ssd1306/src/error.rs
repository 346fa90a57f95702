//! SSD1306 adapter error types.

use display_interface::DisplayError;

/// Errors specific to the SSD1306 adapter.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// The panel did not acknowledge a command or data write.
    #[error("display interface error: {0:?}")]
    Interface(DisplayError),

    /// The configured address is not a 7-bit I2C address.
    #[error("invalid display address {0:#04x}")]
    InvalidAddress(u8),
}
