use egui::{Align2, Area, Color32, Frame, Margin, RichText};
use qrstudio_business::{Intent, Notification};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Floating notification anchored to the bottom of the window. Clicking it
/// dismisses it early.
pub fn toast(ctx: &egui::Context, notification: Option<&Notification>, intents: &mut Vec<Intent>) {
    let Some(notification) = notification else {
        return;
    };

    let fill = if notification.is_error() {
        COLOR_RED
    } else {
        COLOR_GREEN
    };

    Area::new(egui::Id::new("qr_toast"))
        .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let frame = Frame::NONE
                .fill(fill)
                .corner_radius(6.0)
                .inner_margin(Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.label(RichText::new(&notification.message).color(Color32::WHITE));
                });
            if frame.response.interact(egui::Sense::click()).clicked() {
                intents.push(Intent::DismissNotification);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use qrstudio_business::NotificationKind;

    #[test]
    fn test_toast_shows_message() {
        let note = Notification::new("QR code downloaded!", NotificationKind::Success, Utc::now());
        let harness = Harness::new(|ctx| {
            toast(ctx, Some(&note), &mut Vec::new());
        });

        assert!(harness.query_by_label("QR code downloaded!").is_some());
    }

    #[test]
    fn test_no_toast_without_notification() {
        let harness = Harness::new(|ctx| {
            toast(ctx, None, &mut Vec::new());
        });

        assert!(harness.query_by_label_contains("QR code").is_none());
    }
}
