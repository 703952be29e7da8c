//! Configuration settings for ninety.
//!
//! Settings are loaded from `~/.ninety/config.yaml`. Every field has a
//! default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::NinetyError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Focus session settings.
    pub session: SessionConfig,
    /// Break chime settings.
    pub chime: ChimeConfig,
}

/// Focus session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Focus session length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Shortest delay before a breathing break, in seconds.
    #[serde(default = "default_break_min")]
    pub break_min_secs: u32,
    /// Longest delay before a breathing break, in seconds.
    #[serde(default = "default_break_max")]
    pub break_max_secs: u32,
}

/// Break chime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChimeConfig {
    /// Play a chime when a break starts.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Chime volume (0.0 - 1.0).
    #[serde(default = "default_volume")]
    pub volume: f32,
}

// Default value functions for serde
const fn default_focus_minutes() -> u32 {
    90
}

const fn default_break_min() -> u32 {
    180
}

const fn default_break_max() -> u32 {
    300
}

const fn default_true() -> bool {
    true
}

const fn default_volume() -> f32 {
    0.7
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_min_secs: default_break_min(),
            break_max_secs: default_break_max(),
        }
    }
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            volume: default_volume(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, NinetyError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, NinetyError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            NinetyError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            NinetyError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), NinetyError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), NinetyError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| NinetyError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            NinetyError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Focus session length in seconds.
    #[must_use]
    pub const fn focus_seconds(&self) -> i64 {
        self.session.focus_minutes as i64 * 60
    }
}
