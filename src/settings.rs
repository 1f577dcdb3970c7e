//! Read-only preferences used by debug overlays
//!
//! The core only ever asks one question of the settings store: "is this flag
//! on?", with a default for flags that were never written. [`Preferences`]
//! is that question. Two stores are provided:
//!
//! - [`MemoryPreferences`] - a plain map, for tests and for toggling at runtime
//! - [`JsonPreferences`] - a flat `{ "key": bool }` file in the user's config
//!   directory
//!
//! A missing or unreadable file is not an error for callers: the store comes
//! up empty and every lookup returns its default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Known preference keys.
pub struct PreferenceKey;

impl PreferenceKey {
    /// Remaining health drawn above every destructible unit
    pub const DEBUG_DESTRUCTIBLE: &'static str = "debug_destructible";
}

pub trait Preferences {
    /// Value stored under `key`, or `default` if the key was never set.
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

/// In-memory preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryPreferences {
    values: HashMap<String, bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }

    /// Flips `key` (starting from `default` when unset) and returns the new value.
    pub fn toggle(&mut self, key: &str, default: bool) -> bool {
        let value = !self.get_bool(key, default);
        self.set_bool(key, value);
        value
    }
}

impl Preferences for MemoryPreferences {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }
}

/// Errors that can occur while saving preferences.
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::SerializationError(err)
    }
}

/// Preferences persisted as JSON.
pub struct JsonPreferences {
    path: PathBuf,
    values: MemoryPreferences,
}

impl JsonPreferences {
    /// `<config_dir>/towerdefense/settings.json`, or `./settings.json` when
    /// the platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("towerdefense").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("./settings.json"))
    }

    /// Loads the file at `path`. Never fails: unreadable or malformed files
    /// are logged and treated as empty.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(SettingsError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                MemoryPreferences::default()
            }
            Err(e) => {
                warn!("Failed to read preferences from {}: {}", path.display(), e);
                MemoryPreferences::default()
            }
        };
        JsonPreferences { path, values }
    }

    fn read(path: &Path) -> Result<MemoryPreferences, SettingsError> {
        let json = fs::read_to_string(path)?;
        let values: HashMap<String, bool> = serde_json::from_str(&json)?;
        Ok(MemoryPreferences { values })
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.values.set_bool(key, value);
    }

    /// Flips a flag and returns its new value.
    pub fn toggle(&mut self, key: &str, default: bool) -> bool {
        self.values.toggle(key, default)
    }

    /// Writes the current values back to disk, creating the directory if needed.
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Preferences for JsonPreferences {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get_bool(key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("towerdefense-settings-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_missing_key_uses_default() {
        let prefs = MemoryPreferences::new();
        assert!(prefs.get_bool(PreferenceKey::DEBUG_DESTRUCTIBLE, true));
        assert!(!prefs.get_bool(PreferenceKey::DEBUG_DESTRUCTIBLE, false));
    }

    #[test]
    fn test_set_and_toggle() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_bool("a", false);
        assert!(!prefs.get_bool("a", true));

        assert!(prefs.toggle("a", true));
        assert!(!prefs.toggle("b", true));
        assert!(!prefs.get_bool("b", true));
    }

    #[test]
    fn test_json_round_trip_through_disk() {
        let path = temp_path("round-trip");
        let mut prefs = JsonPreferences::load(&path);
        assert!(prefs.get_bool(PreferenceKey::DEBUG_DESTRUCTIBLE, true));

        prefs.set_bool(PreferenceKey::DEBUG_DESTRUCTIBLE, false);
        prefs.save().unwrap();

        let reloaded = JsonPreferences::load(&path);
        assert!(!reloaded.get_bool(PreferenceKey::DEBUG_DESTRUCTIBLE, true));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = temp_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ \"debug_destructible\": 12 }").unwrap();

        let prefs = JsonPreferences::load(&path);
        assert!(prefs.get_bool(PreferenceKey::DEBUG_DESTRUCTIBLE, true));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_default_path_ends_with_settings_file() {
        assert!(JsonPreferences::default_path().ends_with("settings.json"));
    }
}
