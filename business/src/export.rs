//! Saving and sharing the rendered image.
//!
//! Platform specifics live behind [`Exporter`] so the controller can be
//! tested without file dialogs or a browser.

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};

use crate::ExportError;

/// File name attached to shared images.
pub const SHARE_FILE_NAME: &str = "qrcode.png";
/// Title attached to shared images.
pub const SHARE_TITLE: &str = "QR Code";

/// Unique download name derived from the current time, e.g.
/// `qrcode-1767225600000.png`.
pub fn download_file_name(now: DateTime<Utc>) -> String {
    format!("qrcode-{}.png", now.timestamp_millis())
}

/// What gets handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub file_name: String,
    pub title: String,
    /// Source text of the QR code.
    pub text: String,
    pub png: Vec<u8>,
}

/// Result of a share request, delivered asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the share sheet. Not an error.
    Cancelled,
    Failed(String),
}

pub type ShareReplySender = Sender<ShareOutcome>;
pub type ShareReplyReceiver = Receiver<ShareOutcome>;

/// Creates the channel used to report share outcomes back to the controller.
pub fn create_share_channel() -> (ShareReplySender, ShareReplyReceiver) {
    flume::unbounded()
}

/// Trait for platform export operations, enabling mock implementations for testing.
pub trait Exporter {
    /// Save `png` under `file_name` (browser download or native save dialog).
    fn download(&mut self, png: &[u8], file_name: &str) -> Result<(), ExportError>;

    /// Whether [`Exporter::share`] is usable on this platform.
    fn share_supported(&self) -> bool;

    /// Start a share. The outcome must be sent through `reply` exactly once,
    /// either before returning or later from a platform callback.
    fn share(&mut self, payload: SharePayload, reply: ShareReplySender);
}
