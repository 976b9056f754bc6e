use colored::{ColoredString, Colorize};

use crate::pacer::{PacerConfig, PhaseKind, Preset};

/// Color a phase label consistently across outputs.
#[must_use]
pub fn colored_phase(phase: PhaseKind) -> ColoredString {
    let label = phase.label();
    match phase {
        PhaseKind::Inhale => label.cyan().bold(),
        PhaseKind::Hold => label.yellow().bold(),
        PhaseKind::Exhale => label.green().bold(),
        PhaseKind::Pause => label.magenta().bold(),
    }
}

/// Format presets as a pretty table
pub fn format_presets_pretty(presets: &[Preset]) -> String {
    let mut output = format!("Presets ({} patterns)\n", presets.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for preset in presets {
        let config = preset.config();
        let rate = config
            .cycles_per_minute()
            .map_or_else(|| "-".to_string(), |r| format!("{r:.2}/min"));

        output.push_str(&format!(
            "{:<16} {:<24} {:<10} {}\n",
            preset.id.bold(),
            preset.name,
            preset.timing_summary().cyan(),
            rate.dimmed()
        ));
    }

    output
}

/// Describe a run configuration on one line
pub fn format_config_summary(config: &PacerConfig) -> String {
    let mut parts = Vec::new();
    for phase in PhaseKind::ALL {
        if !config.is_enabled(phase) {
            continue;
        }
        let secs = match phase {
            PhaseKind::Inhale => config.inhale_secs,
            PhaseKind::Hold => config.hold_secs,
            PhaseKind::Exhale => config.exhale_secs,
            PhaseKind::Pause => config.pause_secs,
        };
        parts.push(format!("{} {secs}s", phase.label()));
    }

    let mut line = parts.join(" · ");
    if let Some(minutes) = config.session_minutes {
        line.push_str(&format!("  |  session {minutes} min"));
    }
    if config.tone_on_phase_change {
        line.push_str("  |  tones");
    }
    line
}
