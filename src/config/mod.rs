//! Configuration management for presentation-timer.
//!
//! Preferences only (share address, sound, layout). Timer state is never
//! written here; the shareable address is the only carrier of a duration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::location::DEFAULT_BASE;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "presentation-timer";

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the timer is shared under when none is given on the command line
    #[serde(default = "default_share_url")]
    pub share_url: String,

    /// Alert sound settings
    #[serde(default)]
    pub sound: SoundConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_share_url() -> String {
    DEFAULT_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_url: default_share_url(),
            sound: SoundConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load `path`, falling back to defaults when it cannot be read.
    ///
    /// Also returns where preference changes may be saved: `path` when the
    /// file was absent or parsed cleanly, `None` when it failed to load so
    /// the user's file is never overwritten with defaults.
    pub fn load_or_default(path: PathBuf) -> (Self, Option<PathBuf>) {
        match Self::load_from(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                warn!("Failed to load config, using defaults: {e:#}");
                (Self::default(), None)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate();

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Clamp out-of-range values and fill in an empty share address
    pub fn validate(&mut self) {
        self.sound.volume = self.sound.volume.min(100);
        if self.share_url.trim().is_empty() {
            self.share_url = default_share_url();
        }
    }

    /// Directory holding the config and log files
    pub fn app_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join(APP_DIR))
    }

    /// Get the path to the config file
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.json"))
    }
}

/// Alert sound settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Whether the chime plays at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Chime volume as a percentage (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,
}

fn default_true() -> bool {
    true
}

fn default_volume() -> u8 {
    100
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 100,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Start in the clock-only presentation layout
    #[serde(default)]
    pub presentation_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.share_url, "http://localhost:3000/");
        assert!(config.sound.enabled);
        assert_eq!(config.sound.volume, 100);
        assert!(!config.display.presentation_mode);
    }

    #[test]
    fn test_validate_clamps_volume_and_fills_share_url() {
        let mut config = Config {
            share_url: "  ".to_string(),
            sound: SoundConfig {
                enabled: false,
                volume: 180,
            },
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.sound.volume, 100);
        assert_eq!(config.share_url, DEFAULT_BASE);
        assert!(!config.sound.enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"sound":{"enabled":false}}"#).unwrap();
        assert!(!config.sound.enabled);
        assert_eq!(config.sound.volume, 100);
        assert_eq!(config.share_url, DEFAULT_BASE);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.sound.enabled);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.share_url = "https://talks.example/room".to_string();
        config.sound.enabled = false;
        config.display.presentation_mode = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.share_url, "https://talks.example/room");
        assert!(!loaded.sound.enabled);
        assert!(loaded.display.presentation_mode);
    }

    #[test]
    fn test_broken_file_is_not_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"sound":{"volume":40},}"#).unwrap();

        let (config, save_path) = Config::load_or_default(path);
        assert!(save_path.is_none());
        assert_eq!(config.sound.volume, 100);

        let absent = dir.path().join("absent.json");
        let (_, save_path) = Config::load_or_default(absent.clone());
        assert_eq!(save_path, Some(absent));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
