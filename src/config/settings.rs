//! Configuration settings for breathe.
//!
//! Settings are loaded from `~/.breathe/config.yaml`. Every field has a
//! default, so a partial file (or none at all) is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::AudioBackend;
use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PacerError;
use crate::pacer::{PacerConfig, PacerTiming, Preset};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Tick and transition timing.
    pub pacer: PacerTiming,
    /// What `breathe run` does without flags.
    pub defaults: DefaultsConfig,
    /// Audio output.
    pub audio: AudioConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to `colored`'s global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Defaults for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Preset used when no timings are given.
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Play a tone whenever a phase starts.
    #[serde(default)]
    pub tone_on_phase_change: bool,
    /// Session length in minutes; absent means run until stopped.
    #[serde(default)]
    pub session_minutes: Option<f64>,
}

/// Audio settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AudioConfig {
    /// Tone backend.
    pub backend: AudioBackend,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_preset() -> String {
    Preset::BOX.id.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            tone_on_phase_change: false,
            session_minutes: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if its values are out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, PacerError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let paths = Paths::new()?;
                Self::load_from_path(&paths.config_file)
            }
        }
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if its values are out of range.
    pub fn load_from_path(path: &Path) -> Result<Self, PacerError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PacerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PacerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Check value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::Config` describing the first bad value.
    pub fn validate(&self) -> Result<(), PacerError> {
        if self.pacer.tick_ms == 0 {
            return Err(PacerError::Config("pacer.tick_ms must be positive".to_string()));
        }
        if self.pacer.session_tick_ms == 0 {
            return Err(PacerError::Config(
                "pacer.session_tick_ms must be positive".to_string(),
            ));
        }
        if let Some(minutes) = self.defaults.session_minutes {
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(PacerError::Config(format!(
                    "defaults.session_minutes must be a non-negative number, got {minutes}"
                )));
            }
        }
        Preset::find(&self.defaults.preset)
            .map_err(|e| PacerError::Config(format!("defaults.preset: {e}")))?;
        Ok(())
    }

    /// Run configuration from the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the default preset does not exist.
    pub fn default_run(&self) -> Result<PacerConfig, PacerError> {
        let mut config = Preset::find(&self.defaults.preset)?.config();
        config.tone_on_phase_change = self.defaults.tone_on_phase_change;
        config.session_minutes = self.defaults.session_minutes;
        Ok(config)
    }
}
