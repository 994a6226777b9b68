//! Pixel sampling from a raster image (e.g. a saved screenshot).
//!
//! Feature-gated behind `png` (default on) so the clipboard adapter can be
//! used without pulling in the `image` crate.

use std::path::Path;

use image::RgbaImage;
use value_ramp_core::{PixelSampler, RampError, Rgb};

/// A [`PixelSampler`] over an in-memory RGBA image.
pub struct ImageSampler {
    image: RgbaImage,
}

impl ImageSampler {
    /// Loads any image format enabled on the `image` crate.
    ///
    /// Returns `RampError::Io` if the file cannot be read or decoded.
    pub fn open(path: &Path) -> Result<Self, RampError> {
        let image = image::open(path)
            .map_err(|e| RampError::Io(format!("{}: {e}", path.display())))?
            .to_rgba8();
        log::debug!(
            "loaded {}x{} image from {}",
            image.width(),
            image.height(),
            path.display()
        );
        Ok(Self { image })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl PixelSampler for ImageSampler {
    fn sample(&self, x: u32, y: u32) -> Result<Rgb, RampError> {
        let px = self.image.get_pixel_checked(x, y).ok_or_else(|| {
            RampError::Sample(format!(
                "({x}, {y}) outside {}x{} image",
                self.image.width(),
                self.image.height()
            ))
        })?;
        let [r, g, b, _alpha] = px.0;
        Ok(Rgb::new(r.into(), g.into(), b.into()))
    }
}
