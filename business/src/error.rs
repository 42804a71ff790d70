use thiserror::Error;

/// Failures of a widget operation.
///
/// The `Display` text is what the user sees in the notification.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("Please enter text or URL to generate QR code")]
    EmptyInput,
    #[error("Generate a QR code first")]
    NoImage,
    #[error("Could not generate QR code: {0}")]
    Encode(#[from] EncodeError),
    #[error("Could not save QR code: {0}")]
    Export(#[from] ExportError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("text is too long for the selected error correction level")]
    DataTooLong,
    #[error("{0}")]
    Symbol(String),
}

impl From<qrcode::types::QrError> for EncodeError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => Self::DataTooLong,
            other => Self::Symbol(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    /// The user dismissed the save dialog.
    #[error("cancelled")]
    Cancelled,
    #[error("image is too large to export")]
    TooLarge,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Png(#[from] image::ImageError),
    #[error("{0}")]
    Platform(String),
}

impl ExportError {
    pub fn platform(reason: impl Into<String>) -> Self {
        Self::Platform(reason.into())
    }
}
