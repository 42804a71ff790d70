use std::borrow::Cow;
use std::path::PathBuf;

use qrstudio_business::{ExportError, Exporter, ShareOutcome, SharePayload, ShareReplySender};

/// Desktop exporter: native save dialog and clipboard sharing.
pub struct NativeExporter {
    download_dir: Option<PathBuf>,
    clipboard: Option<arboard::Clipboard>,
}

impl NativeExporter {
    pub fn new(download_dir: Option<PathBuf>) -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("Clipboard unavailable, sharing disabled: {e}");
                None
            }
        };

        Self {
            download_dir,
            clipboard,
        }
    }

    fn copy_to_clipboard(&mut self, payload: &SharePayload) -> Result<(), String> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| "clipboard unavailable".to_owned())?;

        let rgba = image::load_from_memory(&payload.png)
            .map_err(|e| e.to_string())?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        clipboard
            .set_image(arboard::ImageData {
                width: width as usize,
                height: height as usize,
                bytes: Cow::Owned(rgba.into_raw()),
            })
            .map_err(|e| e.to_string())?;

        log::info!(
            "Copied {width}x{height} QR code for \"{}\" to clipboard",
            payload.text
        );
        Ok(())
    }
}

impl Exporter for NativeExporter {
    fn download(&mut self, png: &[u8], file_name: &str) -> Result<(), ExportError> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save QR code")
            .set_file_name(file_name)
            .add_filter("PNG image", &["png"]);
        if let Some(dir) = &self.download_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return Err(ExportError::Cancelled);
        };

        std::fs::write(&path, png)?;
        log::info!("Saved QR code to {}", path.display());
        Ok(())
    }

    fn share_supported(&self) -> bool {
        self.clipboard.is_some()
    }

    fn share(&mut self, payload: SharePayload, reply: ShareReplySender) {
        let outcome = match self.copy_to_clipboard(&payload) {
            Ok(()) => ShareOutcome::Shared,
            Err(reason) => ShareOutcome::Failed(reason),
        };
        if reply.send(outcome).is_err() {
            log::debug!("Share outcome dropped, controller is gone");
        }
    }
}
