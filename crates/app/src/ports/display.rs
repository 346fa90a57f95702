//! Display port — a buffered monochrome panel.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

/// A panel with its own frame buffer: drawing touches the buffer only,
/// [`flush`](Self::flush) makes it visible.
pub trait DisplayPanel: DrawTarget<Color = BinaryColor, Error: std::fmt::Debug> {
    /// Transfer the buffer to the panel.
    ///
    /// # Errors
    ///
    /// Returns [`DrawTarget::Error`] when the panel cannot be reached.
    /// Display failures are fatal to the loop.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
