use egui_kittest::Harness;
use qrstudio_business::AppConfig;
use qrstudio_business::test_utils::MockExporter;
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;
use qrstudio_ui::storage::BufferedPreferences;

pub type TestApp = QrStudioApp<MockExporter>;

/// App wired to `exporter` with no saved preferences.
pub fn new_app<'a>(exporter: MockExporter) -> Harness<'a, TestApp> {
    new_app_with(State::new(
        &AppConfig::default(),
        exporter,
        BufferedPreferences::default(),
    ))
}

#[allow(unused)]
pub fn new_app_with<'a>(state: State<MockExporter>) -> Harness<'a, TestApp> {
    let _ = env_logger::builder().is_test(true).try_init();

    let app = QrStudioApp::new(state);
    let mut harness = Harness::builder()
        .with_size(egui::vec2(900.0, 700.0))
        .build_eframe(|_| app);
    harness.run();
    harness
}

/// Text of the visible toast, if any.
#[allow(unused)]
pub fn toast_message(harness: &Harness<'_, TestApp>) -> Option<String> {
    harness
        .state()
        .state()
        .controller
        .state()
        .notification()
        .map(|n| n.message.clone())
}
