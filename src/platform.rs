// SPDX-License-Identifier: MPL-2.0
//! Host capabilities the locale store depends on: the user's ordered language
//! tags and a single persisted preference value.
//!
//! The store never talks to the OS directly. It goes through [`Platform`],
//! so contexts without language or storage access (static rendering, tests)
//! plug in [`Headless`] or [`Memory`] instead of [`Desktop`].

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const SETTINGS_FILE: &str = "settings.toml";
const APP_DIR: &str = "zup-site";

/// Key under which the raw preference string is persisted.
pub const PREFERENCE_KEY: &str = "locale-preference";

pub trait Platform {
    /// Ordered language tags, most-preferred first. `None` means this
    /// context has no language information at all, which keeps the
    /// auto-detected locale at its fallback.
    fn languages(&self) -> Option<Vec<String>>;

    /// The raw persisted preference string, if one was ever stored.
    fn load_preference(&self) -> Option<String>;

    /// Persists the raw preference string, replacing any previous value.
    fn store_preference(&self, raw: &str) -> Result<()>;
}

/// A context with no language or storage access. Loads yield nothing and
/// stores succeed as no-ops, mirroring how the site behaves when rendered
/// outside a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Platform for Headless {
    fn languages(&self) -> Option<Vec<String>> {
        None
    }

    fn load_preference(&self) -> Option<String> {
        None
    }

    fn store_preference(&self, _raw: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "locale-preference")]
    pub locale_preference: Option<String>,
}

/// Real host integration: language tags from the OS via `sys-locale`,
/// persistence in a TOML settings file under the user config directory.
#[derive(Debug, Clone)]
pub struct Desktop {
    settings_path: Option<PathBuf>,
}

impl Desktop {
    pub fn new() -> Self {
        let settings_path = dirs::config_dir().map(|mut path| {
            path.push(APP_DIR);
            path.push(SETTINGS_FILE);
            path
        });
        Self { settings_path }
    }

    /// Uses an explicit settings file instead of the user config directory.
    pub fn with_settings_path(path: PathBuf) -> Self {
        Self {
            settings_path: Some(path),
        }
    }
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for Desktop {
    fn languages(&self) -> Option<Vec<String>> {
        let languages: Vec<String> = sys_locale::get_locales().collect();
        if languages.is_empty() {
            None
        } else {
            Some(languages)
        }
    }

    fn load_preference(&self) -> Option<String> {
        let path = self.settings_path.as_ref()?;
        if !path.exists() {
            return None;
        }
        match load_from_path(path) {
            Ok(settings) => settings.locale_preference,
            Err(err) => {
                log::warn!("could not read {}: {}", path.display(), err);
                None
            }
        }
    }

    fn store_preference(&self, raw: &str) -> Result<()> {
        let Some(path) = self.settings_path.as_ref() else {
            // No config directory on this system; nothing to persist to.
            return Ok(());
        };
        let settings = Settings {
            locale_preference: Some(raw.to_string()),
        };
        save_to_path(&settings, path)
    }
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

/// In-memory platform with fixed language tags and shared storage.
///
/// Clones share one storage cell, so a test can keep a handle and inspect
/// what the store persisted. Single-threaded by design, like the store.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    languages: Option<Vec<String>>,
    storage: Rc<RefCell<Option<String>>>,
}

impl Memory {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: Some(languages.into_iter().map(Into::into).collect()),
            storage: Rc::default(),
        }
    }

    /// A platform that reports no language information, like [`Headless`]
    /// but with working storage.
    pub fn without_languages() -> Self {
        Self {
            languages: None,
            storage: Rc::default(),
        }
    }

    pub fn with_stored(self, raw: &str) -> Self {
        *self.storage.borrow_mut() = Some(raw.to_string());
        self
    }

    /// The currently persisted value, if any.
    pub fn stored(&self) -> Option<String> {
        self.storage.borrow().clone()
    }
}

impl Platform for Memory {
    fn languages(&self) -> Option<Vec<String>> {
        self.languages.clone()
    }

    fn load_preference(&self) -> Option<String> {
        self.storage.borrow().clone()
    }

    fn store_preference(&self, raw: &str) -> Result<()> {
        *self.storage.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preference() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings_path = temp_dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings {
            locale_preference: Some("ja".to_string()),
        };

        save_to_path(&settings, &settings_path).expect("failed to save settings");
        let loaded = load_from_path(&settings_path).expect("failed to load settings");

        assert_eq!(loaded.locale_preference, Some("ja".to_string()));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings_path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&settings_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&settings_path).expect("load should not error");
        assert!(loaded.locale_preference.is_none());
    }

    #[test]
    fn settings_file_uses_the_fixed_key() {
        let settings = Settings {
            locale_preference: Some("zh".to_string()),
        };
        let content = toml::to_string_pretty(&settings).expect("failed to serialize");
        assert!(content.contains(PREFERENCE_KEY));
    }

    #[test]
    fn desktop_round_trips_preference_through_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let platform = Desktop::with_settings_path(temp_dir.path().join(SETTINGS_FILE));

        assert_eq!(platform.load_preference(), None);
        platform.store_preference("zh").expect("store failed");
        assert_eq!(platform.load_preference(), Some("zh".to_string()));
        platform.store_preference("auto").expect("store failed");
        assert_eq!(platform.load_preference(), Some("auto".to_string()));
    }

    #[test]
    fn headless_loads_nothing_and_stores_quietly() {
        let platform = Headless;
        assert!(platform.languages().is_none());
        assert!(platform.load_preference().is_none());
        platform.store_preference("ja").expect("store should no-op");
        assert!(platform.load_preference().is_none());
    }

    #[test]
    fn memory_clones_share_storage() {
        let platform = Memory::new(["ja-JP"]);
        let handle = platform.clone();
        platform.store_preference("en").expect("store failed");
        assert_eq!(handle.stored(), Some("en".to_string()));
    }
}
