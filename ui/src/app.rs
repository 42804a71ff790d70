use std::time::Duration;

use chrono::Utc;
use qrstudio_business::{Exporter, Intent, Theme};

use crate::{platform::PlatformExporter, state::State, widgets};

/// Window width above which input and preview sit side by side.
const TWO_COLUMN_WIDTH: f32 = 640.0;

pub struct QrStudioApp<X = PlatformExporter> {
    state: State<X>,
    /// Theme the egui visuals currently reflect.
    applied_theme: Option<Theme>,
}

impl<X: Exporter> QrStudioApp<X> {
    /// Called once before the first frame.
    pub fn new(mut state: State<X>) -> Self {
        state.controller.initial_render();
        Self {
            state,
            applied_theme: None,
        }
    }

    pub fn state(&self) -> &State<X> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State<X> {
        &mut self.state
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let theme = self.state.controller.state().theme();
        if self.applied_theme == Some(theme) {
            return;
        }
        apply_theme(ctx, theme);
        self.applied_theme = Some(theme);
    }

    fn dispatch_all(&mut self, ctx: &egui::Context, intents: Vec<Intent>) {
        if intents.is_empty() {
            return;
        }
        for intent in intents {
            // Failures already reached the user as a toast
            if let Err(err) = self.state.controller.dispatch(intent) {
                log::debug!("Intent not applied: {err}");
            }
        }
        ctx.request_repaint();
    }
}

impl<X: Exporter> eframe::App for QrStudioApp<X> {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.controller.poll_share();
        if let Some(left) = self.state.controller.expire_notification(Utc::now()) {
            ctx.request_repaint_after(left);
        }
        self.sync_theme(ctx);
        widgets::sync_texture(ctx, self.state.controller.state(), &mut self.state.qr_texture);

        let mut intents = Vec::new();
        let widget = self.state.controller.state();
        let texture = self.state.qr_texture.as_ref();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            widgets::header(widget.theme(), ui, &mut intents);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if ui.available_width() >= TWO_COLUMN_WIDTH {
                    ui.columns(2, |columns| {
                        controls(&mut columns[0], widget, &mut intents);
                        widgets::qr_preview(widget, texture, &mut columns[1], &mut intents);
                    });
                } else {
                    controls(ui, widget, &mut intents);
                    ui.separator();
                    widgets::qr_preview(widget, texture, ui, &mut intents);
                }
            });
        });

        widgets::toast(ctx, widget.notification(), &mut intents);

        self.dispatch_all(ctx, intents);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.state.controller.store_mut().flush_into(storage);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(5)
    }
}

/// Pins egui's theme preference so an OS light/dark switch cannot override
/// the user's choice.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_theme(match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    });
}

fn controls(ui: &mut egui::Ui, widget: &qrstudio_business::WidgetState, intents: &mut Vec<Intent>) {
    widgets::qr_input(widget, ui, intents);
    ui.add_space(12.0);
    ui.heading("Customize");
    ui.add_space(4.0);
    widgets::customization(widget.settings(), ui, intents);
}
