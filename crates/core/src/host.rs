//! Capabilities the host provides to the controller.
//!
//! Both traits are object-safe; the controller takes them as `&dyn` so a
//! host can swap implementations at runtime (or use in-memory fakes in tests).

use crate::color::Rgb;
use crate::error::RampError;

/// Reads the color of one screen (or image) pixel.
pub trait PixelSampler {
    /// Returns the RGB color at `(x, y)`. Alpha, if any, is discarded.
    fn sample(&self, x: u32, y: u32) -> Result<Rgb, RampError>;
}

/// Receives text the user chose to copy.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), RampError>;
}
