//! # Configuration
//!
//! Manages menu defaults stored in `~/.config/anchor-select/config.json`.
//!
//! ## Overview
//!
//! The [`MenuConfig`] struct is serialized to / deserialized from a JSON file
//! in the user's XDG config directory. Every field is optional in the file;
//! missing fields take their defaults.
//!
//! ```json
//! {
//!   "visible": 7,
//!   "width": 72,
//!   "pointer": "❯",
//!   "pointer_color": "green",
//!   "highlight_fg": "white",
//!   "highlight_bg": "green",
//!   "confirm": true,
//!   "animation": { "enabled": true, "base_ms": 5, "scale_ms": 10 }
//! }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persisted menu configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    /// Maximum number of options shown at once.
    #[serde(default = "default_visible")]
    pub visible: usize,

    /// Column budget for an option label before it wraps.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Glyph drawn in front of the selected option.
    #[serde(default = "default_pointer")]
    pub pointer: String,

    /// Color of the pointer glyph.
    #[serde(default = "default_pointer_color")]
    pub pointer_color: String,

    /// Foreground of the selected option.
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,

    /// Background of the selected option.
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,

    /// Print `Selected: <label>` below the menu after Enter.
    #[serde(default = "default_true")]
    pub confirm: bool,

    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Step animation between selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// When false, moves still step one option at a time but never sleep.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Fixed part of each step's delay, in milliseconds.
    #[serde(default = "default_base_ms")]
    pub base_ms: u64,

    /// Multiplied by `sqrt(remaining steps)`, in milliseconds.
    #[serde(default = "default_scale_ms")]
    pub scale_ms: u64,
}

fn default_visible() -> usize {
    7
}

fn default_width() -> usize {
    72
}

fn default_pointer() -> String {
    "❯".to_string()
}

fn default_pointer_color() -> String {
    "green".to_string()
}

fn default_highlight_fg() -> String {
    "white".to_string()
}

fn default_highlight_bg() -> String {
    "green".to_string()
}

fn default_true() -> bool {
    true
}

fn default_base_ms() -> u64 {
    5
}

fn default_scale_ms() -> u64 {
    10
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            visible: default_visible(),
            width: default_width(),
            pointer: default_pointer(),
            pointer_color: default_pointer_color(),
            highlight_fg: default_highlight_fg(),
            highlight_bg: default_highlight_bg(),
            confirm: true,
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_ms: default_base_ms(),
            scale_ms: default_scale_ms(),
        }
    }
}

impl AnimationConfig {
    /// Animation that renders every step without sleeping.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn base(&self) -> Duration {
        Duration::from_millis(self.base_ms)
    }

    pub fn scale(&self) -> Duration {
        Duration::from_millis(self.scale_ms)
    }
}

impl MenuConfig {
    /// Defaults with the given window size, the shape of a plain
    /// `select(options, visible, width)` call.
    pub fn with_size(visible: usize, width: usize) -> Self {
        Self {
            visible,
            width,
            ..Self::default()
        }
    }

    /// Load configuration from disk. Returns `MenuConfig::default()` if the
    /// file does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            log::warn!("ignoring menu configuration: {err:#}");
            Self::default()
        })
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `MenuConfig::default()`
    /// if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
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

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "anchor-select")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
