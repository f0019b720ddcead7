//! Configuration management for Feedwheel.
//!
//! Configuration is read from `~/.config/feedwheel/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! Command-line flags override what the file says.

pub mod colors;
pub mod interval;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetcher::http_fetcher::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::ingest::DEFAULT_WORKERS;
use crate::rotation::{Intervals, DEFAULT_ADVANCE_INTERVAL, DEFAULT_REFRESH_INTERVAL};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feeds: FeedsConfig,
    pub rotation: RotationConfig,
    pub fetch: FetchConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// Source list file, one feed address per line.
    pub path: PathBuf,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("feeds.txt"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    #[serde(deserialize_with = "interval::deserialize_interval")]
    pub advance_interval: Duration,
    #[serde(deserialize_with = "interval::deserialize_interval")]
    pub refresh_interval: Duration,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            advance_interval: DEFAULT_ADVANCE_INTERVAL,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl RotationConfig {
    pub fn intervals(&self) -> Intervals {
        Intervals {
            advance: self.advance_interval,
            refresh: self.refresh_interval,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum number of sources fetched at once.
    pub workers: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the default path is used, and
    /// a commented default file is written there if it is missing.
    /// Missing fields in the config file will use default values.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/feedwheel/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("feedwheel").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> &'static str {
        r##"# Feedwheel Configuration
#
# Intervals can be written as "10s", "30m", "1h", "1d" or a number of seconds.
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[feeds]
# One feed address per line; blank lines and lines starting with # are skipped.
# Relative paths are resolved against the working directory.
path = "feeds.txt"

[rotation]
# How long each story stays on screen
advance_interval = "10s"

# How often every feed is fetched again
refresh_interval = "1h"

[fetch]
# Maximum number of feeds fetched at the same time
workers = 10

# Per-request timeout in seconds
timeout_secs = 10

[colors]
border = "Green"
title = "Cyan"
meta = "DarkGray"
body = "Reset"

# Status bar
status_fg = "White"
status_bg = "DarkGray"
status_warning = "Yellow"
status_error = "LightRed"

[keybindings]
quit = ["q", "Ctrl+c"]
next = ["Right", "Space"]
previous = ["Left"]
refresh = ["r"]
scroll_up = ["k", "Up"]
scroll_down = ["j", "Down"]
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(content).expect("Default config should be valid TOML");

        assert_eq!(config.feeds.path, PathBuf::from("feeds.txt"));
        assert_eq!(config.rotation.intervals(), Intervals::default());
        assert_eq!(config.fetch.workers, DEFAULT_WORKERS);
        assert_eq!(config.colors.border, Color::Green);
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[rotation]
advance_interval = "30s"

[colors]
border = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.rotation.advance_interval, Duration::from_secs(30));
        assert_eq!(config.rotation.refresh_interval, DEFAULT_REFRESH_INTERVAL);
        assert_eq!(config.colors.border, Color::Rgb(255, 0, 0));
        assert_eq!(config.colors.title, Color::Cyan);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.rotation.intervals(), Intervals::default());
        assert_eq!(config.fetch.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.keybindings.next, vec!["Right", "Space"]);
    }

    #[test]
    fn test_interval_as_seconds() {
        let config: Config = toml::from_str("[rotation]\nrefresh_interval = 120\n").unwrap();
        assert_eq!(config.rotation.refresh_interval, Duration::from_secs(120));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(toml::from_str::<Config>("[rotation]\nadvance_interval = 0\n").is_err());
        assert!(toml::from_str::<Config>("[rotation]\nadvance_interval = \"0s\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[feeds]\npath = \"/srv/feeds.txt\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.feeds.path, PathBuf::from("/srv/feeds.txt"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[rotation]\nadvance_interval = \"soon\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_create_default_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::create_default_config(&path).unwrap();
        let written = Config::load_from(&path).unwrap();
        assert_eq!(written.rotation.intervals(), Intervals::default());
    }
}
