//! Renderer — lays a [`DisplayFrame`] out on the panel buffer and flushes it.
//!
//! Every render starts from a cleared buffer, so the flushed pixels depend on
//! the frame alone and never on what was shown before.

use embedded_graphics::Drawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, Point};
use embedded_graphics::text::{Baseline, Text};
use thermodisplay_domain::frame::DisplayFrame;

use crate::ports::DisplayPanel;

/// Top-left anchors of each text field, in pixels.
mod layout {
    use embedded_graphics::prelude::Point;

    pub const VALUE: Point = Point::new(10, 10);
    pub const LABEL: Point = Point::new(10, 30);
    pub const TIME: Point = Point::new(10, 45);
    pub const DATE: Point = Point::new(10, 55);

    pub const ERROR_TITLE: Point = Point::new(5, 20);
    pub const ERROR_DETAIL: Point = Point::new(5, 40);
}

/// Draw `frame` onto `target` without clearing it first.
///
/// # Errors
///
/// Propagates the draw target's error.
fn draw_frame<T>(target: &mut T, frame: &DisplayFrame) -> Result<(), T::Error>
where
    T: DrawTarget<Color = BinaryColor>,
{
    let emphasis = MonoTextStyle::new(&FONT_9X15_BOLD, BinaryColor::On);
    let normal = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    let texts: Vec<(&str, Point, MonoTextStyle<'_, BinaryColor>)> = match frame {
        DisplayFrame::Reading {
            primary_text,
            label_text,
            time_text,
            date_text,
        } => vec![
            (primary_text.as_str(), layout::VALUE, emphasis),
            (label_text.as_str(), layout::LABEL, normal),
            (time_text.as_str(), layout::TIME, normal),
            (date_text.as_str(), layout::DATE, normal),
        ],
        DisplayFrame::Error { title, detail } => vec![
            (title.as_str(), layout::ERROR_TITLE, emphasis),
            (detail.as_str(), layout::ERROR_DETAIL, normal),
        ],
        DisplayFrame::Blank => Vec::new(),
    };

    for (text, position, style) in texts {
        Text::with_baseline(text, position, style, Baseline::Top).draw(target)?;
    }
    Ok(())
}

/// Owns the panel and draws every frame on it.
pub struct Renderer<D> {
    panel: D,
}

impl<D: DisplayPanel> Renderer<D> {
    pub fn new(panel: D) -> Self {
        Self { panel }
    }

    /// Replace the panel contents with `frame`.
    ///
    /// # Errors
    ///
    /// Returns the panel's error when drawing or the flush fails.
    pub fn render(&mut self, frame: &DisplayFrame) -> Result<(), D::Error> {
        self.panel.clear(BinaryColor::Off)?;
        draw_frame(&mut self.panel, frame)?;
        tracing::trace!(?frame, "flushing frame");
        self.panel.flush()
    }
}
