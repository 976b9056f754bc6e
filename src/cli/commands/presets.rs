//! The `presets` command.

use crate::cli::args::OutputFormat;
use crate::error::PacerError;
use crate::output::format_presets;
use crate::pacer::Preset;

/// List the built-in breathing patterns.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn presets(format: OutputFormat) -> Result<String, PacerError> {
    format_presets(&Preset::ALL, format)
}
