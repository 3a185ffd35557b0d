//! User-scope preference storage.
//!
//! Preferences live in `<config_dir>/plank/config.toml` and mirror the board
//! controls: grouping mode, sort mode, and an optional snapshot endpoint
//! override. Loading is deliberately forgiving — a missing, unreadable, or
//! malformed file falls back to defaults, so a stale value can never keep
//! the board from rendering.

use anyhow::{Context, Result};
use plank_core::prefs::{GroupBy, Preferences, SortBy};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Raw persisted preferences.
///
/// Modes are kept as strings so an unknown value survives the read and
/// falls back at parse time instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub url: Option<String>,
}

impl UserConfig {
    /// Parse the saved mode strings, falling back to defaults for anything
    /// unknown.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            group_by: self
                .group_by
                .as_deref()
                .map_or_else(GroupBy::default, GroupBy::parse_or_default),
            sort_by: self
                .sort_by
                .as_deref()
                .map_or_else(SortBy::default, SortBy::parse_or_default),
        }
    }
}

/// Path of the preference file, honoring the `PLANK_CONFIG_DIR` override.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(dir) = env::var("PLANK_CONFIG_DIR") {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    dirs::config_dir().map(|dir| dir.join("plank/config.toml"))
}

/// Load saved preferences from the user config file. Never fails: any
/// problem reading or parsing is logged and defaults win.
#[must_use]
pub fn load() -> UserConfig {
    config_path().map_or_else(UserConfig::default, |path| load_from(&path))
}

/// Load saved preferences from an explicit path.
#[must_use]
pub fn load_from(path: &Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("could not read {}: {err}", path.display());
            return UserConfig::default();
        }
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!("could not parse {}: {err}", path.display());
            UserConfig::default()
        }
    }
}

/// Persist preferences to the user config file.
///
/// # Errors
///
/// Returns an error if no config directory can be resolved or the file
/// cannot be written.
pub fn save(config: &UserConfig) -> Result<()> {
    let path = config_path().context("no user config directory available")?;
    save_to(&path, config)
}

/// Persist preferences to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_to(path: &Path, config: &UserConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize preferences")?;
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
