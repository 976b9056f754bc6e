//! Path resolution for breathe configuration and logs.
//!
//! Everything lives in `~/.breathe/`:
//! - `config.yaml` - Configuration file (read-only to breathe)
//! - `breathe.log` - Log output while the terminal UI owns the screen

use std::path::PathBuf;

use crate::error::PacerError;

/// Paths to breathe configuration and log files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.breathe/`
    pub root: PathBuf,
    /// Config file: `~/.breathe/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.breathe/breathe.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PacerError> {
        let home = std::env::var("HOME")
            .map_err(|_| PacerError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".breathe")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("breathe.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PacerError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PacerError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".breathe")))
    }
}
