//! The rendered QR image owned by the widget.

use std::sync::Arc;

use image::ImageEncoder as _;
use image::codecs::png::PngEncoder;

use crate::ExportError;

/// RGBA pixels of a rendered QR code.
///
/// The pixel buffer is shared with views that upload it as a texture, so
/// cloning is cheap. The widget keeps exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    width: usize,
    height: usize,
    pixels: Arc<[u8]>,
    generation: u64,
}

impl RenderedImage {
    /// Create an image from RGBA bytes (4 bytes per pixel, row-major).
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            width * height * 4,
            pixels.len(),
            "pixel buffer does not match {width}x{height} RGBA"
        );
        Self {
            width,
            height,
            pixels: pixels.into(),
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Shared handle to the pixel buffer.
    pub fn pixel_buffer(&self) -> &Arc<[u8]> {
        &self.pixels
    }

    /// Counter assigned by the controller; changes every time a new image
    /// replaces the previous one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 4;
        let px = self.pixels.get(start..start + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode the image as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let width = u32::try_from(self.width).map_err(|_e| ExportError::TooLarge)?;
        let height = u32::try_from(self.height).map_err(|_e| ExportError::TooLarge)?;

        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            &self.pixels,
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(png)
    }
}
