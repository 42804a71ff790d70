//! Platform-free core of QR Studio: the widget controller, its state and the
//! collaborator traits the UI implements.

mod color;
mod config;
mod controller;
mod encoder;
mod error;
mod export;
mod notification;
mod quick_fill;
mod rendered;
mod settings;
mod store;
mod theme;

pub mod test_utils;

pub use color::{ParseColorError, Rgb};
pub use config::AppConfig;
pub use controller::{
    Intent, MSG_DOWNLOADED, MSG_GENERATED, MSG_SHARED, QrController, WidgetState,
};
pub use encoder::{EncodeRequest, Encoder, QrCodeEncoder};
pub use error::{EncodeError, ExportError, QrError};
pub use export::{
    Exporter, SHARE_FILE_NAME, SHARE_TITLE, ShareOutcome, SharePayload, ShareReplyReceiver,
    ShareReplySender, create_share_channel, download_file_name,
};
pub use notification::{DEFAULT_TOAST_DURATION, Notification, NotificationKind};
pub use quick_fill::QuickFill;
pub use rendered::RenderedImage;
pub use settings::{
    DEFAULT_PIXEL_SIZE, ErrorCorrection, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, PIXEL_SIZE_STEP,
    ParseLevelError, QrSettings, clamp_pixel_size,
};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::{ParseThemeError, THEME_KEY, Theme};
