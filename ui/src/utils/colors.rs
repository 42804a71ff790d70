//! Shared color constants and conversions for the UI.

use egui::Color32;
use qrstudio_business::Rgb;

/// Forest green background of success toasts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red background of error toasts.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Accent of the primary action button.
pub const COLOR_ACCENT: Color32 = Color32::from_rgb(13, 110, 253);

pub fn to_color32(rgb: Rgb) -> Color32 {
    let [r, g, b] = rgb.0;
    Color32::from_rgb(r, g, b)
}
