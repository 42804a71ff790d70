//! The QR widget controller.
//!
//! Owns the widget state and turns user intents into calls on the three
//! collaborators: the [`Encoder`], the [`Exporter`] and the
//! [`PreferenceStore`]. Every failure is converted into a notification at the
//! point where it happens and never propagates past the controller's caller.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{
    AppConfig, EncodeRequest, Encoder, ErrorCorrection, ExportError, Exporter, Notification,
    NotificationKind, PreferenceStore, QrError, QrSettings, QuickFill, RenderedImage, Rgb,
    SHARE_FILE_NAME, SHARE_TITLE, ShareOutcome, SharePayload, ShareReplyReceiver,
    ShareReplySender, Theme, clamp_pixel_size, create_share_channel, download_file_name,
};

pub const MSG_GENERATED: &str = "QR code generated successfully!";
pub const MSG_DOWNLOADED: &str = "QR code downloaded!";
pub const MSG_SHARED: &str = "QR code shared!";

/// Everything the widget shows.
///
/// `rendered` is present exactly when `input_text` is non-empty and the
/// encode that produced it succeeded.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    draft: String,
    input_text: String,
    settings: QrSettings,
    rendered: Option<RenderedImage>,
    theme: Theme,
    notification: Option<Notification>,
    pending_share: bool,
}

impl WidgetState {
    /// Current content of the text field.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Last text that was successfully encoded, empty before the first one.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn settings(&self) -> &QrSettings {
        &self.settings
    }

    pub fn rendered(&self) -> Option<&RenderedImage> {
        self.rendered.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.rendered.is_some()
    }

    /// The empty-state placeholder is shown until the first image exists.
    pub fn show_placeholder(&self) -> bool {
        self.rendered.is_none()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Whether a share sheet is open and its outcome has not arrived yet.
    pub fn is_share_pending(&self) -> bool {
        self.pending_share
    }
}

/// The closed set of user actions the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    EditText(String),
    Generate,
    SetForeground(Rgb),
    SetBackground(Rgb),
    SetPixelSize(u32),
    SetErrorCorrection(ErrorCorrection),
    Download,
    Share,
    ToggleTheme,
    QuickFill(QuickFill),
    DismissNotification,
}

/// Controller of one QR widget.
pub struct QrController<E, X, S> {
    state: WidgetState,
    encoder: E,
    exporter: X,
    store: S,
    toast_duration: Duration,
    generation: u64,
    share_tx: ShareReplySender,
    share_rx: ShareReplyReceiver,
}

impl<E, X, S> QrController<E, X, S>
where
    E: Encoder,
    X: Exporter,
    S: PreferenceStore,
{
    /// Creates the controller with `config`'s settings and the theme found in
    /// `store` (light if none).
    pub fn new(config: &AppConfig, encoder: E, exporter: X, store: S) -> Self {
        let theme = Theme::load(&store);
        let (share_tx, share_rx) = create_share_channel();

        log::debug!("Widget created with theme {theme} and settings {:?}", config.settings);

        Self {
            state: WidgetState {
                settings: config.settings,
                theme,
                ..WidgetState::default()
            },
            encoder,
            exporter,
            store,
            toast_duration: config.toast_duration,
            generation: 0,
            share_tx,
            share_rx,
        }
    }

    /// Prefills the text field.
    pub fn with_draft(mut self, draft: impl Into<String>) -> Self {
        self.state.draft = draft.into();
        self
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn exporter(&self) -> &X {
        &self.exporter
    }

    pub fn exporter_mut(&mut self) -> &mut X {
        &mut self.exporter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration
    }

    /// Maps one user intent to the matching operation.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), QrError> {
        match intent {
            Intent::EditText(text) => {
                self.state.draft = text;
                Ok(())
            }
            Intent::Generate => self.generate(),
            Intent::SetForeground(color) => self.update_settings(|s| s.foreground = color),
            Intent::SetBackground(color) => self.update_settings(|s| s.background = color),
            Intent::SetPixelSize(size) => {
                self.update_settings(|s| s.pixel_size = clamp_pixel_size(size))
            }
            Intent::SetErrorCorrection(level) => {
                self.update_settings(|s| s.error_correction = level)
            }
            Intent::Download => self.export_download(),
            Intent::Share => self.export_share(),
            Intent::ToggleTheme => {
                self.toggle_theme();
                Ok(())
            }
            Intent::QuickFill(kind) => self.apply_quick_fill(kind),
            Intent::DismissNotification => {
                self.state.notification = None;
                Ok(())
            }
        }
    }

    /// Encodes the prefilled draft, if any. Blank drafts are skipped silently.
    pub fn initial_render(&mut self) {
        if self.state.draft.trim().is_empty() {
            return;
        }
        // Failures are already surfaced as a notification
        if self.generate().is_err() {
            log::debug!("Initial render failed");
        }
    }

    /// Encodes the current draft.
    pub fn generate(&mut self) -> Result<(), QrError> {
        let draft = self.state.draft.clone();
        self.encode(&draft).map(|_| ())
    }

    /// Encodes `text` with the current settings and makes the result the
    /// displayed image.
    ///
    /// Blank text fails with [`QrError::EmptyInput`]; an encoder failure
    /// keeps the previous image. In both cases only the notification changes.
    pub fn encode(&mut self, text: &str) -> Result<&RenderedImage, QrError> {
        let text = text.trim();
        if text.is_empty() {
            return self.fail(QrError::EmptyInput);
        }

        let request = EncodeRequest::new(text, &self.state.settings);
        let image = match self.encoder.encode(&request) {
            Ok(image) => image,
            Err(err) => return self.fail(err.into()),
        };

        // Release the old surface before installing the new one
        if let Some(previous) = self.state.rendered.take() {
            log::debug!("Releasing QR image generation {}", previous.generation());
            drop(previous);
        }

        self.generation += 1;
        log::info!(
            "Generated QR image generation {} ({}x{}) for {} chars",
            self.generation,
            image.width(),
            image.height(),
            text.chars().count()
        );
        self.state.input_text = text.to_owned();
        self.notify(MSG_GENERATED, NotificationKind::Success);

        Ok(self
            .state
            .rendered
            .insert(image.with_generation(self.generation)))
    }

    /// Saves the current image as a PNG with a unique file name.
    pub fn export_download(&mut self) -> Result<(), QrError> {
        let png = self.current_png()?;
        let file_name = download_file_name(Utc::now());

        match self.exporter.download(&png, &file_name) {
            Ok(()) => {
                log::info!("Downloaded {file_name} ({} bytes)", png.len());
                self.notify(MSG_DOWNLOADED, NotificationKind::Success);
                Ok(())
            }
            Err(ExportError::Cancelled) => {
                log::debug!("Download of {file_name} cancelled by user");
                Ok(())
            }
            Err(err) => self.fail(err.into()),
        }
    }

    /// Shares the current image through the platform share sheet, falling
    /// back to [`QrController::export_download`] when sharing is unavailable.
    ///
    /// The outcome is handled by [`QrController::poll_share`].
    pub fn export_share(&mut self) -> Result<(), QrError> {
        if self.state.rendered.is_none() {
            return self.fail(QrError::NoImage);
        }
        if !self.exporter.share_supported() {
            log::info!("Native share unavailable, downloading instead");
            return self.export_download();
        }

        let png = self.current_png()?;
        let payload = SharePayload {
            file_name: SHARE_FILE_NAME.to_owned(),
            title: SHARE_TITLE.to_owned(),
            text: self.state.input_text.clone(),
            png,
        };

        log::info!("Opening share sheet for \"{}\"", payload.text);
        self.state.pending_share = true;
        self.exporter.share(payload, self.share_tx.clone());

        // Platforms that answer synchronously are settled right away
        self.poll_share();
        Ok(())
    }

    /// Handles share outcomes that have arrived since the last call.
    pub fn poll_share(&mut self) {
        while let Ok(outcome) = self.share_rx.try_recv() {
            self.state.pending_share = false;
            match outcome {
                ShareOutcome::Shared => {
                    log::info!("QR code shared");
                    self.notify(MSG_SHARED, NotificationKind::Success);
                }
                ShareOutcome::Cancelled => {
                    log::debug!("Share sheet dismissed by user");
                }
                ShareOutcome::Failed(reason) => {
                    log::warn!("Share failed ({reason}), falling back to download");
                    if self.export_download().is_err() {
                        log::debug!("Download fallback failed as well");
                    }
                }
            }
        }
    }

    /// Flips between light and dark and persists the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme.toggled();
        self.state.theme = theme;
        theme.save(&mut self.store);
        log::info!("Theme switched to {theme}");
        theme
    }

    /// Puts a canned sample into the text field and encodes it.
    pub fn apply_quick_fill(&mut self, kind: QuickFill) -> Result<(), QrError> {
        kind.sample().clone_into(&mut self.state.draft);
        self.generate()
    }

    /// Shows `message`, replacing whatever notification is visible.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.state.notification = Some(Notification::new(message, kind, Utc::now()));
    }

    /// Drops the notification once it has been visible long enough.
    ///
    /// Returns the time it has left, or `None` if nothing is shown.
    pub fn expire_notification(&mut self, now: DateTime<Utc>) -> Option<Duration> {
        let toast = self.state.notification.as_ref()?;
        if toast.is_expired(now, self.toast_duration) {
            self.state.notification = None;
            return None;
        }
        Some(toast.remaining(now, self.toast_duration))
    }

    /// Applies a settings change and re-encodes if an image is displayed.
    fn update_settings(&mut self, change: impl FnOnce(&mut QrSettings)) -> Result<(), QrError> {
        let before = self.state.settings;
        change(&mut self.state.settings);
        if self.state.settings == before || !self.state.has_image() {
            return Ok(());
        }

        log::debug!("Settings changed, re-encoding: {:?}", self.state.settings);
        self.generate()
    }

    fn current_png(&mut self) -> Result<Vec<u8>, QrError> {
        let encoded = match &self.state.rendered {
            Some(image) => image.to_png().map_err(QrError::from),
            None => Err(QrError::NoImage),
        };
        encoded.or_else(|err| self.fail(err))
    }

    fn fail<T>(&mut self, err: QrError) -> Result<T, QrError> {
        log::warn!("{err}");
        self.notify(err.to_string(), NotificationKind::Error);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockExporter, RecordingEncoder};
    use crate::{MemoryStore, QrCodeEncoder, THEME_KEY};
    use chrono::TimeDelta;

    fn controller() -> QrController<RecordingEncoder, MockExporter, MemoryStore> {
        QrController::new(
            &AppConfig::default(),
            RecordingEncoder::default(),
            MockExporter::default(),
            MemoryStore::new(),
        )
    }

    #[test]
    fn test_new_state_is_empty() {
        let ctrl = controller();
        let state = ctrl.state();
        assert_eq!(state.input_text(), "");
        assert!(state.rendered().is_none());
        assert!(state.show_placeholder());
        assert_eq!(state.theme(), Theme::Light);
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_theme_is_restored_from_store() {
        let store = MemoryStore::new().with_value(THEME_KEY, "dark");
        let ctrl = QrController::new(
            &AppConfig::default(),
            RecordingEncoder::default(),
            MockExporter::default(),
            store,
        );
        assert_eq!(ctrl.state().theme(), Theme::Dark);
    }

    #[test]
    fn test_encode_trims_and_stores() {
        let mut ctrl = controller();
        let image = ctrl.encode("  hello  ").unwrap();
        assert_eq!(image.generation(), 1);

        assert_eq!(ctrl.state().input_text(), "hello");
        assert_eq!(ctrl.encoder().calls()[0].text, "hello");
        assert!(!ctrl.state().show_placeholder());
    }

    #[test]
    fn test_generation_increases() {
        let mut ctrl = controller();
        ctrl.encode("a").unwrap();
        ctrl.encode("b").unwrap();
        assert_eq!(ctrl.state().rendered().map(RenderedImage::generation), Some(2));
    }

    #[test]
    fn test_initial_render_skips_blank_draft() {
        let mut ctrl = controller();
        ctrl.initial_render();
        assert!(ctrl.encoder().calls().is_empty());
        assert!(ctrl.state().notification().is_none());

        let mut ctrl = controller().with_draft("prefilled");
        ctrl.initial_render();
        assert_eq!(ctrl.state().input_text(), "prefilled");
    }

    #[test]
    fn test_notification_expires() {
        let mut ctrl = controller();
        ctrl.notify("hello", NotificationKind::Success);
        let shown_at = ctrl.state().notification().unwrap().shown_at;

        assert!(ctrl.expire_notification(shown_at).is_some());
        assert!(ctrl.state().notification().is_some());

        assert!(ctrl.expire_notification(shown_at + TimeDelta::seconds(3)).is_none());
        assert!(ctrl.state().notification().is_none());
    }

    #[test]
    fn test_real_encoder_round() {
        let mut ctrl = QrController::new(
            &AppConfig::default(),
            QrCodeEncoder,
            MockExporter::default(),
            MemoryStore::new(),
        );
        let image = ctrl.encode("https://example.com").unwrap();
        assert_eq!(image.size(), [256, 256]);
    }
}
