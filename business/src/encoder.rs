//! Turning text plus visual settings into a rendered QR image.

use qrcode::QrCode;

use crate::{EncodeError, ErrorCorrection, QrSettings, RenderedImage, Rgb};

/// Everything the encoder needs for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeRequest<'a> {
    pub text: &'a str,
    pub width: usize,
    pub height: usize,
    pub foreground: Rgb,
    pub background: Rgb,
    pub error_correction: ErrorCorrection,
}

impl<'a> EncodeRequest<'a> {
    /// A square request sized and colored by `settings`.
    pub fn new(text: &'a str, settings: &QrSettings) -> Self {
        let side = settings.pixel_size as usize;
        Self {
            text,
            width: side,
            height: side,
            foreground: settings.foreground,
            background: settings.background,
            error_correction: settings.error_correction,
        }
    }
}

/// Trait for the QR encoding backend, enabling mock implementations for testing.
///
/// Implementations must be deterministic: identical requests produce
/// identical images.
pub trait Encoder {
    fn encode(&self, request: &EncodeRequest<'_>) -> Result<RenderedImage, EncodeError>;
}

/// Encoder backed by the `qrcode` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeEncoder;

impl Encoder for QrCodeEncoder {
    fn encode(&self, request: &EncodeRequest<'_>) -> Result<RenderedImage, EncodeError> {
        let code = QrCode::with_error_correction_level(
            request.text.as_bytes(),
            request.error_correction.to_qrcode(),
        )?;
        let modules = code.width();

        // Largest integer scale that fits, never below one pixel per module
        let scale = (request.width.min(request.height) / modules).max(1);
        let symbol = modules * scale;
        let width = request.width.max(symbol);
        let height = request.height.max(symbol);
        let offset_x = (width - symbol) / 2;
        let offset_y = (height - symbol) / 2;

        let dark = request.foreground.to_rgba();
        let light = request.background.to_rgba();

        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&light);
        }

        for (y, row) in code.to_colors().chunks(modules).enumerate() {
            for (x, color) in row.iter().enumerate() {
                if *color != qrcode::Color::Dark {
                    continue;
                }
                for dy in 0..scale {
                    let py = offset_y + y * scale + dy;
                    let row_start = (py * width + offset_x + x * scale) * 4;
                    for dx in 0..scale {
                        let start = row_start + dx * 4;
                        pixels[start..start + 4].copy_from_slice(&dark);
                    }
                }
            }
        }

        log::debug!(
            "Encoded {} bytes into {modules}x{modules} modules at scale {scale} ({width}x{height}px)",
            request.text.len()
        );

        Ok(RenderedImage::new(width, height, pixels))
    }
}
