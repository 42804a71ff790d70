use egui::{ComboBox, Response, Slider, Ui, color_picker};
use qrstudio_business::{
    ErrorCorrection, Intent, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, PIXEL_SIZE_STEP, QrSettings, Rgb,
};

/// Colour, size and error-correction controls.
///
/// Only changed values are pushed, so an untouched panel emits nothing.
pub fn customization(settings: &QrSettings, ui: &mut Ui, intents: &mut Vec<Intent>) -> Response {
    egui::Grid::new("qr_customization")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("QR Color");
            if let Some(color) = color_row(ui, settings.foreground) {
                intents.push(Intent::SetForeground(color));
            }
            ui.end_row();

            ui.label("Background");
            if let Some(color) = color_row(ui, settings.background) {
                intents.push(Intent::SetBackground(color));
            }
            ui.end_row();

            ui.label("Size");
            let mut size = settings.pixel_size;
            ui.horizontal(|ui| {
                let slider = Slider::new(&mut size, MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE)
                    .step_by(f64::from(PIXEL_SIZE_STEP))
                    .show_value(false);
                if ui.add(slider).changed() && size != settings.pixel_size {
                    intents.push(Intent::SetPixelSize(size));
                }
                ui.label(format!("{size}px"));
            });
            ui.end_row();

            ui.label("Error Correction");
            let mut level = settings.error_correction;
            ComboBox::from_id_salt("qr_error_correction")
                .selected_text(level.description())
                .show_ui(ui, |ui| {
                    for option in ErrorCorrection::ALL {
                        ui.selectable_value(&mut level, option, option.description());
                    }
                });
            if level != settings.error_correction {
                intents.push(Intent::SetErrorCorrection(level));
            }
            ui.end_row();
        })
        .response
}

fn color_row(ui: &mut Ui, current: Rgb) -> Option<Rgb> {
    let mut rgb = current.0;
    ui.horizontal(|ui| {
        let changed = color_picker::color_edit_button_srgb(ui, &mut rgb).changed();
        ui.monospace(Rgb(rgb).to_string());
        changed
    })
    .inner
    .then_some(Rgb(rgb))
    .filter(|color| *color != current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn test_untouched_panel_emits_nothing() {
        let settings = QrSettings::default();
        let mut harness = Harness::new_ui_state(
            |ui, intents: &mut Vec<Intent>| {
                customization(&settings, ui, intents);
            },
            Vec::new(),
        );
        harness.run();

        assert!(harness.state().is_empty());
    }

    #[test]
    fn test_shows_current_values() {
        let settings = QrSettings {
            foreground: Rgb::new(0x12, 0x34, 0x56),
            pixel_size: 320,
            ..QrSettings::default()
        };
        let harness = Harness::new_ui(|ui| {
            customization(&settings, ui, &mut Vec::new());
        });

        assert!(harness.query_by_label("#123456").is_some());
        assert!(harness.query_by_label("320px").is_some());
    }
}
