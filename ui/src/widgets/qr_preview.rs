//! Preview of the rendered QR code plus the download and share actions.
//!
//! The rendered pixels are uploaded once per image generation and kept as an
//! `egui::TextureHandle`. Replacing the handle frees the previous texture.

use egui::{Color32, ColorImage, Frame, Margin, Response, RichText, TextureHandle, TextureOptions, Ui};
use qrstudio_business::{Intent, RenderedImage, WidgetState};

use crate::utils::colors::to_color32;

/// Largest edge the preview is drawn with (pixels).
const MAX_PREVIEW_EDGE: f32 = 320.0;

pub const PLACEHOLDER_TEXT: &str = "Your QR code will appear here";

/// The GPU copy of the displayed QR image.
pub struct QrTexture {
    generation: u64,
    handle: TextureHandle,
}

impl std::fmt::Debug for QrTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrTexture")
            .field("generation", &self.generation)
            .field("size", &self.handle.size())
            .finish_non_exhaustive()
    }
}

impl QrTexture {
    fn upload(ctx: &egui::Context, image: &RenderedImage) -> Self {
        let color_image = ColorImage::from_rgba_unmultiplied(image.size(), image.pixels());
        // Nearest keeps module edges crisp when scaled
        let handle = ctx.load_texture("qr_code", color_image, TextureOptions::NEAREST);
        Self {
            generation: image.generation(),
            handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Keeps `cache` in step with the widget's current image.
pub fn sync_texture(ctx: &egui::Context, state: &WidgetState, cache: &mut Option<QrTexture>) {
    match state.rendered() {
        Some(image) => {
            let stale = cache
                .as_ref()
                .is_none_or(|texture| texture.generation != image.generation());
            if stale {
                log::debug!("Uploading QR texture generation {}", image.generation());
                // Drop the old texture before allocating the new one
                *cache = None;
                *cache = Some(QrTexture::upload(ctx, image));
            }
        }
        None => *cache = None,
    }
}

/// Renders the QR preview (or the empty-state placeholder) and the export
/// buttons.
pub fn qr_preview(
    state: &WidgetState,
    texture: Option<&QrTexture>,
    ui: &mut Ui,
    intents: &mut Vec<Intent>,
) -> Response {
    ui.vertical_centered(|ui| {
        ui.heading("Preview");
        ui.add_space(8.0);

        match (state.show_placeholder(), texture) {
            (false, Some(texture)) => {
                let [w, h] = texture.handle.size();
                let scale = (MAX_PREVIEW_EDGE / w.max(h) as f32).min(1.0);
                let size = egui::vec2(w as f32 * scale, h as f32 * scale);
                ui.add(egui::Image::new((texture.handle.id(), size)))
                    .on_hover_text(state.input_text());
            }
            _ => placeholder(ui, to_color32(state.settings().background)),
        }

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("⬇ Download PNG").clicked() {
                intents.push(Intent::Download);
            }

            let share_label = if state.is_share_pending() {
                "Sharing..."
            } else {
                "↗ Share"
            };
            if ui
                .add_enabled(!state.is_share_pending(), egui::Button::new(share_label))
                .clicked()
            {
                intents.push(Intent::Share);
            }
        });
    })
    .response
}

fn placeholder(ui: &mut Ui, fill: Color32) {
    Frame::NONE
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, Color32::GRAY))
        .inner_margin(Margin::same(24))
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(MAX_PREVIEW_EDGE * 0.6, MAX_PREVIEW_EDGE * 0.6));
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(PLACEHOLDER_TEXT).color(Color32::GRAY));
            });
        });
}
