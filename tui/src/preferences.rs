//! User preferences persistence.
//!
//! Stores user preferences in `~/.lok/preferences.json`. Loading never
//! fails: a missing or unreadable file just yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Preferences {
    /// The selected theme ID.
    #[serde(default)]
    pub theme_id: String,
    /// Number of the last puzzle played, preselected in the puzzle list.
    #[serde(default)]
    pub last_puzzle: Option<u32>,
}

/// Get the preferences file path (`~/.lok/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".lok").join("preferences.json"))
}

/// Load preferences from disk, defaulting when there is no usable file.
pub fn load_preferences() -> Preferences {
    let Ok(path) = preferences_path() else {
        return Preferences::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Preferences::default(),
    }
}

/// Save preferences to disk, creating `~/.lok/` as needed.
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    let path = preferences_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string_pretty(prefs)?)?;
    Ok(())
}
