//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! The only timing knob exposed is the slide transition duration; it
//! drives both the navigator's gate and the visual animation, so the two
//! cannot fall out of sync.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "FolioDeck";

/// Default settle window for slide transitions, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Slide transition duration in milliseconds.
    #[serde(default)]
    pub transition_ms: Option<u64>,
    /// Prefer a dark theme when set.
    #[serde(default)]
    pub dark_theme: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transition_ms: Some(DEFAULT_TRANSITION_MS),
            dark_theme: Some(true),
        }
    }
}

impl Config {
    /// The transition settle duration, clamped to a sane range so a
    /// hand-edited config cannot freeze the gate shut.
    pub fn transition_settle(&self) -> Duration {
        let ms = self
            .transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .clamp(50, 5_000);
        Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            transition_ms: Some(400),
            dark_theme: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn transition_settle_defaults_to_800ms() {
        let config = Config {
            transition_ms: None,
            dark_theme: None,
        };
        assert_eq!(config.transition_settle(), Duration::from_millis(800));
    }

    #[test]
    fn transition_settle_is_clamped() {
        let too_short = Config {
            transition_ms: Some(0),
            dark_theme: None,
        };
        assert_eq!(too_short.transition_settle(), Duration::from_millis(50));

        let too_long = Config {
            transition_ms: Some(60_000),
            dark_theme: None,
        };
        assert_eq!(too_long.transition_settle(), Duration::from_millis(5_000));
    }
}
