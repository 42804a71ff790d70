//! End-to-end tests of the QR widget driven through the egui harness.
//!
//! The app runs with the real encoder and a recording exporter, so clicks go
//! through the same dispatch path as in the shipped binary.

mod common;

use crate::common::{new_app, new_app_with, toast_message};
use kittest::Queryable;
use qrstudio_business::test_utils::{MockExporter, ShareReply};
use qrstudio_business::{
    AppConfig, Intent, MSG_DOWNLOADED, MSG_GENERATED, MSG_SHARED, QrError, QuickFill,
    ShareOutcome, THEME_KEY, Theme,
};
use qrstudio_ui::state::State;
use qrstudio_ui::storage::BufferedPreferences;
use qrstudio_ui::widgets::{GENERATE_LABEL, PLACEHOLDER_TEXT, theme_button_label};

#[test]
fn test_starts_with_placeholder() {
    let harness = new_app(MockExporter::default());

    assert!(harness.query_by_label_contains(PLACEHOLDER_TEXT).is_some());
    assert!(toast_message(&harness).is_none());
}

#[test]
fn test_quick_fill_generates() {
    let mut harness = new_app(MockExporter::default());

    harness.get_by_label(QuickFill::Url.label()).click();
    harness.run();

    let widget = harness.state().state().controller.state();
    assert_eq!(widget.draft(), "https://example.com");
    assert_eq!(widget.input_text(), "https://example.com");
    assert_eq!(widget.rendered().map(|i| i.size()), Some([256, 256]));
    assert_eq!(toast_message(&harness).as_deref(), Some(MSG_GENERATED));
    assert!(harness.query_by_label_contains(PLACEHOLDER_TEXT).is_none());
    assert!(harness.query_by_label(MSG_GENERATED).is_some());
}

#[test]
fn test_generate_with_empty_input_reports() {
    let mut harness = new_app(MockExporter::default());

    harness.get_by_label(GENERATE_LABEL).click();
    harness.run();

    let message = QrError::EmptyInput.to_string();
    assert_eq!(toast_message(&harness), Some(message.clone()));
    assert!(harness.query_by_label(&message).is_some());
    assert!(harness.state().state().controller.state().show_placeholder());
}

#[test]
fn test_download_without_image_reports() {
    let mut harness = new_app(MockExporter::default());

    harness.get_by_label("⬇ Download PNG").click();
    harness.run();

    assert_eq!(toast_message(&harness), Some(QrError::NoImage.to_string()));
    assert!(harness.state().state().controller.exporter().downloads().is_empty());
}

#[test]
fn test_download_after_generate() {
    let mut harness = new_app(MockExporter::default());

    harness.get_by_label(QuickFill::Text.label()).click();
    harness.run();
    harness.get_by_label("⬇ Download PNG").click();
    harness.run();

    let downloads = harness.state().state().controller.exporter().downloads();
    assert_eq!(downloads.len(), 1);
    assert!(downloads[0].file_name.starts_with("qrcode-"));
    assert!(downloads[0].file_name.ends_with(".png"));
    assert!(downloads[0].png.starts_with(b"\x89PNG"));
    assert_eq!(toast_message(&harness).as_deref(), Some(MSG_DOWNLOADED));
}

#[test]
fn test_share_without_platform_support_downloads() {
    let mut harness = new_app(MockExporter::default());

    harness.get_by_label(QuickFill::Email.label()).click();
    harness.run();
    harness.get_by_label("↗ Share").click();
    harness.run();

    let exporter = harness.state().state().controller.exporter();
    assert!(exporter.shares().is_empty());
    assert_eq!(exporter.downloads().len(), 1);
    assert_eq!(toast_message(&harness).as_deref(), Some(MSG_DOWNLOADED));
}

#[test]
fn test_share_success() {
    let exporter = MockExporter::default().with_share(ShareReply::Immediate(ShareOutcome::Shared));
    let mut harness = new_app(exporter);

    harness.get_by_label(QuickFill::Url.label()).click();
    harness.run();
    harness.get_by_label("↗ Share").click();
    harness.run();

    let exporter = harness.state().state().controller.exporter();
    assert_eq!(exporter.shares().len(), 1);
    assert_eq!(exporter.shares()[0].text, "https://example.com");
    assert!(exporter.downloads().is_empty());
    assert_eq!(toast_message(&harness).as_deref(), Some(MSG_SHARED));
}

#[test]
fn test_deferred_share_settles_on_later_frame() {
    let exporter = MockExporter::default().with_share(ShareReply::Deferred);
    let mut harness = new_app(exporter);

    harness.get_by_label(QuickFill::Url.label()).click();
    harness.run();
    harness.get_by_label("↗ Share").click();
    harness.run();

    assert!(harness.state().state().controller.state().is_share_pending());
    assert!(harness.query_by_label("Sharing...").is_some());

    let resolved = harness
        .state_mut()
        .state_mut()
        .controller
        .exporter_mut()
        .resolve_share(ShareOutcome::Shared);
    assert!(resolved);
    harness.run();

    assert!(!harness.state().state().controller.state().is_share_pending());
    assert_eq!(toast_message(&harness).as_deref(), Some(MSG_SHARED));
}

#[test]
fn test_theme_toggle_persists() {
    let mut harness = new_app(MockExporter::default());
    assert_eq!(harness.state().state().controller.state().theme(), Theme::Light);

    harness.get_by_label(&theme_button_label(Theme::Light)).click();
    harness.run();

    let controller = &harness.state().state().controller;
    assert_eq!(controller.state().theme(), Theme::Dark);
    assert!(controller.store().is_dirty());
    assert!(harness.query_by_label(&theme_button_label(Theme::Dark)).is_some());
    assert!(harness.ctx.style().visuals.dark_mode);
}

#[test]
fn test_saved_theme_restored() {
    let mut preferences = BufferedPreferences::default();
    qrstudio_business::PreferenceStore::set(&mut preferences, THEME_KEY, "dark");

    let state = State::new(&AppConfig::default(), MockExporter::default(), preferences);
    let harness = new_app_with(state);

    assert_eq!(harness.state().state().controller.state().theme(), Theme::Dark);
    assert!(harness.ctx.style().visuals.dark_mode);
}

#[test]
fn test_size_change_reencodes_displayed_image() {
    let mut harness = new_app(MockExporter::default());

    harness.get_by_label(QuickFill::Url.label()).click();
    harness.run();
    let before = harness
        .state()
        .state()
        .qr_texture
        .as_ref()
        .map(|t| t.generation());

    harness
        .state_mut()
        .state_mut()
        .controller
        .dispatch(Intent::SetPixelSize(320))
        .unwrap();
    harness.run();

    let app = harness.state().state();
    assert_eq!(app.controller.state().rendered().map(|i| i.size()), Some([320, 320]));
    assert_eq!(
        app.qr_texture.as_ref().map(|t| t.generation()),
        before.map(|g| g + 1)
    );
    assert!(harness.query_by_label("320px").is_some());
}

#[test]
fn test_prefilled_draft_rendered_at_startup() {
    let state = State::new(
        &AppConfig::default(),
        MockExporter::default(),
        BufferedPreferences::default(),
    )
    .with_draft("hello from the command line");
    let harness = new_app_with(state);

    let widget = harness.state().state().controller.state();
    assert_eq!(widget.input_text(), "hello from the command line");
    assert!(widget.has_image());
    assert!(harness.state().state().qr_texture.is_some());
}
