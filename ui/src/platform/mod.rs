//! Platform implementations of the export collaborator.
//!
//! - **Native (Windows, macOS, Linux)**: save dialog via `rfd`, share by
//!   copying the image to the clipboard via `arboard`.
//! - **Web (WASM)**: download through a temporary anchor, share through the
//!   Web Share API when the browser has it.

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeExporter;
#[cfg(target_arch = "wasm32")]
pub use web::WebExporter;

/// The exporter used by the real app on this target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformExporter = NativeExporter;
#[cfg(target_arch = "wasm32")]
pub type PlatformExporter = WebExporter;
