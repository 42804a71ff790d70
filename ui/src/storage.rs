//! Preference store backed by eframe's persistence.
//!
//! eframe only hands out its storage at creation time and in
//! [`eframe::App::save`], so writes are buffered here and flushed from there.

use qrstudio_business::{MemoryStore, PreferenceStore, THEME_KEY};

/// Keys read back from eframe storage at startup.
const PERSISTED_KEYS: &[&str] = &[THEME_KEY];

#[derive(Debug, Default, Clone)]
pub struct BufferedPreferences {
    values: MemoryStore,
    dirty: bool,
}

impl BufferedPreferences {
    /// Seeds the buffer from eframe storage, if the platform has one.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut values = MemoryStore::new();
        if let Some(storage) = storage {
            for key in PERSISTED_KEYS {
                if let Some(value) = storage.get_string(key) {
                    log::debug!("Restored preference {key}={value}");
                    values.set(key, &value);
                }
            }
        }
        Self {
            values,
            dirty: false,
        }
    }

    /// Whether there are writes not yet handed to eframe.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes buffered values into `storage` and flushes it to disk.
    pub fn flush_into(&mut self, storage: &mut dyn eframe::Storage) {
        if !self.dirty {
            return;
        }
        for (key, value) in self.values.iter() {
            storage.set_string(key, value.to_owned());
        }
        storage.flush();
        self.dirty = false;
        log::debug!("Preferences saved");
    }
}

impl PreferenceStore for BufferedPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.set(key, value);
        self.dirty = true;
    }
}
