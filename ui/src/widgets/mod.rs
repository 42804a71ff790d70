mod customization;
mod header;
mod qr_input;
mod qr_preview;
mod toast;

pub use customization::customization;
pub use header::{APP_TITLE, header, theme_button_label};
pub use qr_input::{GENERATE_LABEL, INPUT_HINT, input_id, qr_input};
pub use qr_preview::{PLACEHOLDER_TEXT, QrTexture, qr_preview, sync_texture};
pub use toast::toast;
