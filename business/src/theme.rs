use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::PreferenceStore;

/// Storage key of the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Visual mode of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon for the toggle button: offers the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }

    /// The persisted theme, or [`Theme::Light`] if none or unreadable.
    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("Ignoring stored theme: {err}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn save(self, store: &mut impl PreferenceStore) {
        store.set(THEME_KEY, self.as_str());
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_load_defaults_to_light() {
        assert_eq!(Theme::load(&MemoryStore::new()), Theme::Light);
    }

    #[test]
    fn test_load_ignores_unknown_value() {
        let store = MemoryStore::new().with_value(THEME_KEY, "sepia");
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        Theme::Dark.save(&mut store);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }
}
