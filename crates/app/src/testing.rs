//! In-memory panel shared by the unit tests.

use std::sync::{Arc, Mutex};

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Size};

use crate::ports::DisplayPanel;

const WIDTH: usize = 128;
const HEIGHT: usize = 64;

pub const NACK: &str = "i2c nack";

/// One flushed frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(Vec<bool>);

impl Frame {
    fn blank() -> Self {
        Self(vec![false; WIDTH * HEIGHT])
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|lit| !lit)
    }

    pub fn lit(&self, x: usize, y: usize) -> bool {
        self.0[y * WIDTH + x]
    }
}

/// Draws into a buffer and records a copy on every flush. Flushes fail once
/// `fail_after` frames went through.
#[derive(Debug, Clone)]
pub struct MemoryPanel {
    buffer: Frame,
    flushed: Arc<Mutex<Vec<Frame>>>,
    fail_after: Option<usize>,
}

impl Default for MemoryPanel {
    fn default() -> Self {
        Self {
            buffer: Frame::blank(),
            flushed: Arc::default(),
            fail_after: None,
        }
    }
}

impl MemoryPanel {
    pub fn failing_after(limit: usize) -> Self {
        Self {
            fail_after: Some(limit),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.flushed.lock().unwrap().clone()
    }

    pub fn buffer(&self) -> &Frame {
        &self.buffer
    }
}

impl OriginDimensions for MemoryPanel {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl DrawTarget for MemoryPanel {
    type Color = BinaryColor;
    type Error = &'static str;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                && x < WIDTH
                && y < HEIGHT
            {
                self.buffer.0[y * WIDTH + x] = color.is_on();
            }
        }
        Ok(())
    }
}

impl DisplayPanel for MemoryPanel {
    fn flush(&mut self) -> Result<(), Self::Error> {
        let mut flushed = self.flushed.lock().unwrap();
        if self.fail_after.is_some_and(|limit| flushed.len() >= limit) {
            return Err(NACK);
        }
        flushed.push(self.buffer.clone());
        Ok(())
    }
}
