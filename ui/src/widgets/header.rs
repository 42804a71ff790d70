use egui::{Response, Ui};
use qrstudio_business::{Intent, Theme};

pub const APP_TITLE: &str = "QR Code Generator";

/// Label of the theme button; it names the theme a click switches to.
pub fn theme_button_label(theme: Theme) -> String {
    let target = match theme.toggled() {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    };
    format!("{} {target}", theme.toggle_icon())
}

/// Title bar with the light/dark toggle on the right.
pub fn header(theme: Theme, ui: &mut Ui, intents: &mut Vec<Intent>) -> Response {
    ui.horizontal(|ui| {
        ui.heading(APP_TITLE);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(theme_button_label(theme))
                .on_hover_text("Toggle light/dark theme")
                .clicked()
            {
                intents.push(Intent::ToggleTheme);
            }
        });
    })
    .response
}
