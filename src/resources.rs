//! Display strings
//!
//! Labels are looked up once when the HUD is built, never per frame.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Keys of the strings the HUD displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    HudScore,
    HudMoney,
    HudHealth,
}

pub trait StringResources {
    fn string(&self, key: StringKey) -> String;
}

/// Localized HUD labels, loadable from JSON. Missing entries keep the
/// English defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringTable {
    pub hud_score: String,
    pub hud_money: String,
    pub hud_health: String,
}

impl Default for StringTable {
    fn default() -> Self {
        StringTable {
            hud_score: "Score: ".to_string(),
            hud_money: "Money: ".to_string(),
            hud_health: "Health: ".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ResourceError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::IoError(e) => write!(f, "IO error: {}", e),
            ResourceError::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ResourceError {}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::IoError(err)
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        ResourceError::SerializationError(err)
    }
}

impl StringTable {
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Like [`StringTable::load_from_file`], but logs and falls back to the
    /// defaults instead of failing.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_from_file(path).unwrap_or_else(|e| {
            warn!("Using default strings, failed to load {}: {}", path.display(), e);
            Self::default()
        })
    }
}

impl StringResources for StringTable {
    fn string(&self, key: StringKey) -> String {
        match key {
            StringKey::HudScore => self.hud_score.clone(),
            StringKey::HudMoney => self.hud_money.clone(),
            StringKey::HudHealth => self.hud_health.clone(),
        }
    }
}
