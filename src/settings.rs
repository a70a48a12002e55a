//! Panel settings store
//!
//! The find panel's persisted state: last search string, option checkboxes,
//! collection reach, and the recent-search list. Read when the panel opens,
//! written after each search and at close. Distinct from the read-only user
//! config: this file is owned and rewritten by the application.
//!
//! No file locking - last writer wins if multiple instances run
//! simultaneously.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::collect::CollectReach;
use crate::search::SearchScope;

const SETTINGS_DIR: &str = "shotfind";
const SETTINGS_FILE: &str = "panel.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub last_search: String,
    pub use_regex: bool,
    /// Stored in the checkbox's own polarity; the engine negates it in
    /// exactly one place when building a query.
    pub ignore_case: bool,
    pub scope: SearchScope,
    pub reach: CollectReach,
    /// Most recent first, bounded by the history module.
    pub recent_searches: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_search: String::new(),
            use_regex: false,
            ignore_case: false,
            scope: SearchScope::All,
            reach: CollectReach::Project,
            recent_searches: Vec::new(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Load panel settings, falling back to defaults if the file is missing or
/// unreadable. A malformed file is treated the same way; the panel must
/// come up regardless.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => return Settings::default(),
    };

    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(_e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse panel settings {:?}: {}", path, _e);
            Settings::default()
        }
    }
}

/// Persist panel settings. Failure degrades to session-only state; the
/// caller decides whether to warn.
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    let Some(path) = settings_path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine settings file path",
        ));
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&path, contents)?;

    Ok(())
}
