//! Recording mock collaborators for controller tests.
//!
//! Available to this crate's tests and, with the `test-utils` feature, to
//! other crates' tests.
//!
//! # Example
//!
//! ```ignore
//! use qrstudio_business::test_utils::{MockExporter, RecordingEncoder};
//!
//! let exporter = MockExporter::default().with_share(ShareReply::Immediate(ShareOutcome::Cancelled));
//! let mut ctrl = QrController::new(&AppConfig::default(), RecordingEncoder::default(), exporter, MemoryStore::new());
//! ctrl.encode("hello")?;
//! ctrl.export_share()?;
//! assert!(ctrl.exporter().downloads().is_empty());
//! ```

#![cfg(any(test, feature = "test-utils"))]

use std::cell::{Cell, RefCell};

use crate::{
    EncodeError, EncodeRequest, Encoder, ErrorCorrection, ExportError, Exporter, RenderedImage,
    Rgb, ShareOutcome, SharePayload, ShareReplySender,
};

/// One call seen by [`RecordingEncoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeCall {
    pub text: String,
    pub width: usize,
    pub height: usize,
    pub foreground: Rgb,
    pub background: Rgb,
    pub error_correction: ErrorCorrection,
}

/// Encoder that records every request and paints a solid foreground square.
#[derive(Debug, Default)]
pub struct RecordingEncoder {
    calls: RefCell<Vec<EncodeCall>>,
    fail_next: Cell<bool>,
}

impl RecordingEncoder {
    pub fn calls(&self) -> Vec<EncodeCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Makes the next call fail with [`EncodeError::DataTooLong`].
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }
}

impl Encoder for RecordingEncoder {
    fn encode(&self, request: &EncodeRequest<'_>) -> Result<RenderedImage, EncodeError> {
        self.calls.borrow_mut().push(EncodeCall {
            text: request.text.to_owned(),
            width: request.width,
            height: request.height,
            foreground: request.foreground,
            background: request.background,
            error_correction: request.error_correction,
        });

        if self.fail_next.replace(false) {
            return Err(EncodeError::DataTooLong);
        }

        let pixels = request
            .foreground
            .to_rgba()
            .repeat(request.width * request.height);
        Ok(RenderedImage::new(request.width, request.height, pixels))
    }
}

/// How [`MockExporter`] answers share requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareReply {
    /// Reply before `share` returns.
    Immediate(ShareOutcome),
    /// Keep the reply sender; answer later with [`MockExporter::resolve_share`].
    Deferred,
}

/// A download seen by [`MockExporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCall {
    pub file_name: String,
    pub png: Vec<u8>,
}

/// Exporter that records downloads and shares instead of touching the platform.
///
/// The default has no native share, so shares fall back to downloads.
#[derive(Debug, Default)]
pub struct MockExporter {
    share: Option<ShareReply>,
    downloads: Vec<DownloadCall>,
    shares: Vec<SharePayload>,
    pending: Option<ShareReplySender>,
    cancel_next_download: bool,
    fail_next_download: Option<String>,
}

impl MockExporter {
    /// A platform with native share answering as `reply` says.
    pub fn with_share(mut self, reply: ShareReply) -> Self {
        self.share = Some(reply);
        self
    }

    pub fn downloads(&self) -> &[DownloadCall] {
        &self.downloads
    }

    pub fn shares(&self) -> &[SharePayload] {
        &self.shares
    }

    /// Makes the next download behave like a dismissed save dialog.
    pub fn cancel_next_download(&mut self) {
        self.cancel_next_download = true;
    }

    /// Makes the next download fail with a platform error.
    pub fn fail_next_download(&mut self, reason: impl Into<String>) {
        self.fail_next_download = Some(reason.into());
    }

    /// Answers a deferred share. Returns false if none is open.
    pub fn resolve_share(&mut self, outcome: ShareOutcome) -> bool {
        match self.pending.take() {
            Some(reply) => reply.send(outcome).is_ok(),
            None => false,
        }
    }
}

impl Exporter for MockExporter {
    fn download(&mut self, png: &[u8], file_name: &str) -> Result<(), ExportError> {
        if std::mem::take(&mut self.cancel_next_download) {
            return Err(ExportError::Cancelled);
        }
        if let Some(reason) = self.fail_next_download.take() {
            return Err(ExportError::platform(reason));
        }

        self.downloads.push(DownloadCall {
            file_name: file_name.to_owned(),
            png: png.to_vec(),
        });
        Ok(())
    }

    fn share_supported(&self) -> bool {
        self.share.is_some()
    }

    fn share(&mut self, payload: SharePayload, reply: ShareReplySender) {
        self.shares.push(payload);
        match &self.share {
            Some(ShareReply::Immediate(outcome)) => {
                let _sent = reply.send(outcome.clone());
            }
            Some(ShareReply::Deferred) => self.pending = Some(reply),
            None => {
                let _sent = reply.send(ShareOutcome::Failed("share unsupported".to_owned()));
            }
        }
    }
}
