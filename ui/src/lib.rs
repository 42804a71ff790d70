#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod platform;
pub mod state;
pub mod storage;
pub mod utils;
pub mod widgets;

pub use app::QrStudioApp;
