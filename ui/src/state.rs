use qrstudio_business::{AppConfig, QrCodeEncoder, QrController};

use crate::platform::PlatformExporter;
use crate::storage::BufferedPreferences;
use crate::widgets::QrTexture;

/// The controller as the app wires it: real encoder, eframe-backed
/// preferences and a pluggable exporter.
pub type Controller<X> = QrController<QrCodeEncoder, X, BufferedPreferences>;

/// The main application state.
pub struct State<X = PlatformExporter> {
    /// Business side of the widget.
    pub controller: Controller<X>,
    /// Texture of the displayed image, re-uploaded when its generation moves.
    pub qr_texture: Option<QrTexture>,
}

impl<X: qrstudio_business::Exporter> State<X> {
    pub fn new(config: &AppConfig, exporter: X, preferences: BufferedPreferences) -> Self {
        Self {
            controller: QrController::new(config, QrCodeEncoder, exporter, preferences),
            qr_texture: None,
        }
    }

    /// Same as [`State::new`] with the text field prefilled.
    pub fn with_draft(mut self, draft: impl Into<String>) -> Self {
        self.controller = self.controller.with_draft(draft);
        self
    }
}
