use eframe::wasm_bindgen::{JsCast as _, JsValue};
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FilePropertyBag, HtmlAnchorElement, Url};

use qrstudio_business::{ExportError, Exporter, ShareOutcome, SharePayload, ShareReplySender};

const PNG_MIME: &str = "image/png";

/// How long a download link stays valid after its click (ms).
const REVOKE_DELAY_MS: i32 = 1_000;

/// Browser exporter: anchor downloads and the Web Share API.
pub struct WebExporter {
    egui_ctx: egui::Context,
}

impl WebExporter {
    /// `egui_ctx` is repainted when a share sheet closes.
    pub fn new(egui_ctx: egui::Context) -> Self {
        Self { egui_ctx }
    }
}

fn js_error(err: JsValue) -> ExportError {
    ExportError::platform(describe(&err))
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(err, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn error_name(err: &JsValue) -> Option<String> {
    Reflect::get(err, &"name".into()).ok()?.as_string()
}

fn png_parts(png: &[u8]) -> Array {
    Array::of1(&Uint8Array::from(png))
}

/// Resolves after `ms` milliseconds on the browser's timer queue.
fn sleep(ms: i32) -> Promise {
    Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _resolved = resolve.call0(&JsValue::UNDEFINED);
        }
    })
}

/// Frees an object URL once the download it started has had time to begin.
fn revoke_later(url: String) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(sleep(REVOKE_DELAY_MS)).await {
            log::debug!("Revoke timer failed: {}", describe(&err));
        }
        if let Err(err) = Url::revoke_object_url(&url) {
            log::debug!("Could not revoke download URL: {}", describe(&err));
        }
    });
}

fn navigator_share() -> Option<(web_sys::Navigator, Function)> {
    let navigator = web_sys::window()?.navigator();
    let share = Reflect::get(&navigator, &"share".into()).ok()?;
    share
        .dyn_into::<Function>()
        .ok()
        .map(|share| (navigator, share))
}

fn start_share(payload: &SharePayload) -> Result<Promise, JsValue> {
    let (navigator, share) =
        navigator_share().ok_or_else(|| JsValue::from_str("Web Share API unavailable"))?;

    let options = FilePropertyBag::new();
    options.set_type(PNG_MIME);
    let file =
        File::new_with_u8_array_sequence_and_options(&png_parts(&payload.png), &payload.file_name, &options)?;

    let data = Object::new();
    Reflect::set(&data, &"title".into(), &payload.title.as_str().into())?;
    Reflect::set(&data, &"text".into(), &payload.text.as_str().into())?;
    Reflect::set(&data, &"files".into(), &Array::of1(&file))?;

    share.call1(&navigator, &data)?.dyn_into::<Promise>()
}

impl Exporter for WebExporter {
    fn download(&mut self, png: &[u8], file_name: &str) -> Result<(), ExportError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::platform("no document"))?;

        let options = BlobPropertyBag::new();
        options.set_type(PNG_MIME);
        let blob = Blob::new_with_u8_array_sequence_and_options(&png_parts(png), &options)
            .map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_e| ExportError::platform("could not create download link"))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);

        // Some browsers ignore clicks on detached anchors
        let body = document
            .body()
            .ok_or_else(|| ExportError::platform("no document body"))?;
        body.append_child(&anchor).map_err(js_error)?;
        anchor.click();
        anchor.remove();

        revoke_later(url);
        log::info!("Started browser download of {file_name}");
        Ok(())
    }

    fn share_supported(&self) -> bool {
        navigator_share().is_some()
    }

    fn share(&mut self, payload: SharePayload, reply: ShareReplySender) {
        let promise = match start_share(&payload) {
            Ok(promise) => promise,
            Err(err) => {
                let _sent = reply.send(ShareOutcome::Failed(describe(&err)));
                return;
            }
        };

        let egui_ctx = self.egui_ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match JsFuture::from(promise).await {
                Ok(_) => ShareOutcome::Shared,
                Err(err) if error_name(&err).as_deref() == Some("AbortError") => {
                    ShareOutcome::Cancelled
                }
                Err(err) => ShareOutcome::Failed(describe(&err)),
            };
            if reply.send(outcome).is_err() {
                log::debug!("Share outcome dropped, controller is gone");
            }
            egui_ctx.request_repaint();
        });
    }
}
