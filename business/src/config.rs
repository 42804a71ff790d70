use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

use crate::{DEFAULT_TOAST_DURATION, QrSettings, clamp_pixel_size};

/// Startup configuration of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Settings the widget starts with.
    pub settings: QrSettings,
    /// Lifetime of a notification.
    pub toast_duration: Duration,
    /// Directory the native save dialog opens in.
    pub download_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: QrSettings::default(),
            toast_duration: DEFAULT_TOAST_DURATION,
            download_dir: None,
        }
    }
}

/// Environment variables as read, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    qr_foreground: Option<String>,
    qr_background: Option<String>,
    qr_pixel_size: Option<u32>,
    qr_error_correction: Option<String>,
    qr_toast_ms: Option<u64>,
    qr_download_dir: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Every variable is optional; see [`AppConfig::from_vars`].
    pub fn from_env() -> anyhow::Result<Self> {
        log::info!("Loading configuration from environment variables");
        Self::from_vars(std::env::vars())
    }

    /// Builds the configuration from `(name, value)` pairs.
    ///
    /// Recognized: `QR_FOREGROUND`, `QR_BACKGROUND`, `QR_PIXEL_SIZE`,
    /// `QR_ERROR_CORRECTION`, `QR_TOAST_MS` and `QR_DOWNLOAD_DIR`.
    pub fn from_vars<I, S>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            qr_foreground,
            qr_background,
            qr_pixel_size,
            qr_error_correction,
            qr_toast_ms,
            qr_download_dir,
        } = raw;

        let mut config = Self::default();

        if let Some(hex) = qr_foreground {
            config.settings.foreground = hex.parse().context("QR_FOREGROUND")?;
        }
        if let Some(hex) = qr_background {
            config.settings.background = hex.parse().context("QR_BACKGROUND")?;
        }
        if let Some(size) = qr_pixel_size {
            let clamped = clamp_pixel_size(size);
            if clamped != size {
                log::warn!("QR_PIXEL_SIZE {size} out of range, using {clamped}");
            }
            config.settings.pixel_size = clamped;
        }
        if let Some(level) = qr_error_correction {
            config.settings.error_correction = level.parse().context("QR_ERROR_CORRECTION")?;
        }
        if let Some(ms) = qr_toast_ms {
            config.toast_duration = Duration::from_millis(ms);
        }
        config.download_dir = qr_download_dir
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorCorrection, Rgb};

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unrelated_vars_are_ignored() {
        let config = AppConfig::from_vars(vec![("HOME", "/root"), ("PATH", "/usr/bin")]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config = AppConfig::from_vars(vec![
            ("QR_FOREGROUND", "#112233"),
            ("QR_BACKGROUND", "#fff"),
            ("QR_PIXEL_SIZE", "320"),
            ("QR_ERROR_CORRECTION", "q"),
            ("QR_TOAST_MS", "1500"),
            ("QR_DOWNLOAD_DIR", "/tmp/qr"),
        ])
        .unwrap();

        assert_eq!(config.settings.foreground, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(config.settings.background, Rgb::WHITE);
        assert_eq!(config.settings.pixel_size, 320);
        assert_eq!(config.settings.error_correction, ErrorCorrection::Q);
        assert_eq!(config.toast_duration, Duration::from_millis(1500));
        assert_eq!(config.download_dir, Some(PathBuf::from("/tmp/qr")));
    }

    #[test]
    fn test_pixel_size_is_clamped() {
        let config = AppConfig::from_vars(vec![("QR_PIXEL_SIZE", "4096")]).unwrap();
        assert_eq!(config.settings.pixel_size, crate::MAX_PIXEL_SIZE);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = AppConfig::from_vars(vec![("QR_FOREGROUND", "blue")]).unwrap_err();
        assert!(err.to_string().contains("QR_FOREGROUND"));
    }
}
