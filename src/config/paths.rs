//! Path resolution for the ninety configuration file.
//!
//! All ninety data lives in `~/.ninety/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::NinetyError;

/// Paths to ninety configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.ninety/`
    pub root: PathBuf,
    /// Config file: `~/.ninety/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, NinetyError> {
        let home = std::env::var("HOME")
            .map_err(|_| NinetyError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".ninety")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), NinetyError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                NinetyError::Config(format!("Failed to create directory {:?}: {e}", self.root))
            })?;
        }

        Ok(())
    }
}
