//! Output formatting for breathe.
//!
//! This module provides formatters for command results and the headless
//! transcript display.

mod json;
mod pretty;
mod transcript;

use crate::cli::args::OutputFormat;
use crate::error::PacerError;
use crate::pacer::Preset;

pub use json::*;
pub use pretty::*;
pub use transcript::{format_clock, TranscriptSink};

/// Format presets based on output format
///
/// # Errors
///
/// Returns `PacerError::Json` if JSON serialization fails.
pub fn format_presets(presets: &[Preset], format: OutputFormat) -> Result<String, PacerError> {
    match format {
        OutputFormat::Pretty => Ok(format_presets_pretty(presets)),
        OutputFormat::Json => format_presets_json(presets),
    }
}
