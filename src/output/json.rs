//! JSON output formatting for breathe.

use serde::Serialize;
use serde_json::json;

use crate::error::PacerError;
use crate::pacer::Preset;

/// Format presets as JSON
///
/// Each item carries its timings plus `cycle_seconds` and
/// `cycles_per_minute`.
///
/// # Errors
///
/// Returns `PacerError::Json` if JSON serialization fails.
pub fn format_presets_json(presets: &[Preset]) -> Result<String, PacerError> {
    let items: Vec<_> = presets
        .iter()
        .map(|preset| {
            let config = preset.config();
            json!({
                "preset": preset,
                "cycle_seconds": config.cycle_seconds(),
                "cycles_per_minute": config.cycles_per_minute(),
            })
        })
        .collect();

    let output = json!({
        "count": presets.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PacerError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PacerError> {
    Ok(serde_json::to_string_pretty(value)?)
}
