//! Customization settings for the generated QR code.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Rgb;

/// Smallest selectable image size in pixels.
pub const MIN_PIXEL_SIZE: u32 = 128;
/// Largest selectable image size in pixels.
pub const MAX_PIXEL_SIZE: u32 = 512;
/// Step of the size slider.
pub const PIXEL_SIZE_STEP: u32 = 8;
pub const DEFAULT_PIXEL_SIZE: u32 = 256;

/// Redundancy tier of the QR symbol.
///
/// Higher levels survive more damage at the cost of data capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrection {
    /// Recovers about 7% of the symbol.
    L,
    /// Recovers about 15% of the symbol.
    M,
    /// Recovers about 25% of the symbol.
    Q,
    /// Recovers about 30% of the symbol.
    #[default]
    H,
}

impl ErrorCorrection {
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Label shown in the level selector.
    pub fn description(self) -> &'static str {
        match self {
            Self::L => "Low (7%)",
            Self::M => "Medium (15%)",
            Self::Q => "Quartile (25%)",
            Self::H => "High (30%)",
        }
    }

    pub(crate) fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            Self::L => qrcode::EcLevel::L,
            Self::M => qrcode::EcLevel::M,
            Self::Q => qrcode::EcLevel::Q,
            Self::H => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error correction level `{0}`, expected one of L, M, Q, H")]
pub struct ParseLevelError(String);

impl FromStr for ErrorCorrection {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

/// Clamps a requested size into the slider range.
pub fn clamp_pixel_size(size: u32) -> u32 {
    size.clamp(MIN_PIXEL_SIZE, MAX_PIXEL_SIZE)
}

/// Visual settings applied to every encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrSettings {
    pub foreground: Rgb,
    pub background: Rgb,
    pub pixel_size: u32,
    pub error_correction: ErrorCorrection,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            pixel_size: DEFAULT_PIXEL_SIZE,
            error_correction: ErrorCorrection::default(),
        }
    }
}
