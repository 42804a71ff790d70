#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;
use qrstudio_ui::storage::BufferedPreferences;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use qrstudio_business::AppConfig;
    use qrstudio_ui::platform::NativeExporter;

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        log::warn!("Ignoring invalid configuration: {e:#}");
        AppConfig::default()
    });

    // `qrstudio-ui <text>` opens with the text already encoded
    let draft = std::env::args().nth(1).unwrap_or_default();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 560.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QR Studio",
        native_options,
        Box::new(move |cc| {
            let preferences = BufferedPreferences::load(cc.storage);
            let exporter = NativeExporter::new(config.download_dir.clone());
            let state = State::new(&config, exporter, preferences).with_draft(draft);
            Ok(Box::new(QrStudioApp::new(state)))
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use qrstudio_business::AppConfig;
    use qrstudio_ui::platform::WebExporter;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("egui_canvas")
            .expect("Failed to find egui_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("egui_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    let preferences = BufferedPreferences::load(cc.storage);
                    let exporter = WebExporter::new(cc.egui_ctx.clone());
                    let state = State::new(&AppConfig::default(), exporter, preferences);
                    Ok(Box::new(QrStudioApp::new(state)))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
