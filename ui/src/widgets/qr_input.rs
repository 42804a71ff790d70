//! Text entry for the payload, the generate button and the quick-fill
//! samples.
//!
//! Enter in the text field generates; Shift+Enter inserts a line break.

use egui::{Button, Key, Response, RichText, TextEdit, Ui};
use qrstudio_business::{Intent, QuickFill, WidgetState};

use crate::utils::colors::COLOR_ACCENT;

pub const INPUT_HINT: &str = "Enter text or URL...";
pub const GENERATE_LABEL: &str = "Generate QR Code";

pub fn input_id() -> egui::Id {
    egui::Id::new("qr_input_text")
}

/// Takes a plain Enter away from the focused text field so it does not
/// insert a newline. Returns whether one was taken.
fn take_submit_key(ui: &mut Ui, id: egui::Id) -> bool {
    if !ui.memory(|m| m.has_focus(id)) {
        return false;
    }
    ui.input_mut(|i| !i.modifiers.shift && i.consume_key(egui::Modifiers::NONE, Key::Enter))
}

pub fn qr_input(state: &WidgetState, ui: &mut Ui, intents: &mut Vec<Intent>) -> Response {
    ui.vertical(|ui| {
        let id = input_id();
        let submitted = take_submit_key(ui, id);

        let mut draft = state.draft().to_owned();
        let edit = ui.add(
            TextEdit::multiline(&mut draft)
                .id(id)
                .hint_text(INPUT_HINT)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if edit.changed() {
            intents.push(Intent::EditText(draft));
        }
        if submitted {
            intents.push(Intent::Generate);
        }

        ui.add_space(6.0);

        let generate = Button::new(RichText::new(GENERATE_LABEL).color(egui::Color32::WHITE))
            .fill(COLOR_ACCENT)
            .min_size(egui::vec2(ui.available_width(), 28.0));
        if ui.add(generate).clicked() {
            intents.push(Intent::Generate);
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Quick fill:");
            for kind in QuickFill::ALL {
                if ui.button(kind.label()).on_hover_text(kind.sample()).clicked() {
                    intents.push(Intent::QuickFill(kind));
                }
            }
        });
    })
    .response
}
