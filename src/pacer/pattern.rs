//! Pacer configuration and named breathing patterns.

use serde::{Deserialize, Serialize};

use super::phase::{PhaseDurations, PhaseKind};
use crate::error::PacerError;

/// Everything a run needs, read once when the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PacerConfig {
    /// Inhale length in seconds
    pub inhale_secs: f64,
    /// Hold length in seconds
    pub hold_secs: f64,
    /// Exhale length in seconds
    pub exhale_secs: f64,
    /// Pause length in seconds
    pub pause_secs: f64,
    /// Include the hold phase
    pub hold_enabled: bool,
    /// Include the pause phase
    pub pause_enabled: bool,
    /// Session length in minutes; `None` runs until stopped
    pub session_minutes: Option<f64>,
    /// Play a tone at the start of every phase
    pub tone_on_phase_change: bool,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Preset::BOX.config()
    }
}

impl PacerConfig {
    /// Per-phase durations in milliseconds.
    #[must_use]
    pub fn durations(&self) -> PhaseDurations {
        PhaseDurations::from_seconds(
            self.inhale_secs,
            self.hold_secs,
            self.exhale_secs,
            self.pause_secs,
        )
    }

    /// Session target in milliseconds, if session mode is on.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn session_target_ms(&self) -> Option<u64> {
        self.session_minutes
            .map(|minutes| (minutes * 60_000.0).round() as u64)
    }

    /// Whether `phase` takes part in the cycle.
    #[must_use]
    pub const fn is_enabled(&self, phase: PhaseKind) -> bool {
        match phase {
            PhaseKind::Inhale | PhaseKind::Exhale => true,
            PhaseKind::Hold => self.hold_enabled,
            PhaseKind::Pause => self.pause_enabled,
        }
    }

    /// Length of one full cycle in seconds, counting only enabled phases.
    #[must_use]
    pub fn cycle_seconds(&self) -> f64 {
        let mut total = self.inhale_secs + self.exhale_secs;
        if self.hold_enabled {
            total += self.hold_secs;
        }
        if self.pause_enabled {
            total += self.pause_secs;
        }
        total
    }

    /// Average cycles per minute, or `None` for an empty cycle.
    #[must_use]
    pub fn cycles_per_minute(&self) -> Option<f64> {
        let cycle = self.cycle_seconds();
        (cycle > 0.0 && cycle.is_finite()).then(|| 60.0 / cycle)
    }

    /// Human-readable cycle rate.
    #[must_use]
    pub fn format_cycles_per_minute(&self) -> String {
        self.cycles_per_minute().map_or_else(
            || "Average Cycles per Minute: -".to_string(),
            |rate| format!("Average Cycles per Minute: {rate:.2}"),
        )
    }

    /// Overwrite timings and phase switches with those of `preset`.
    ///
    /// Session length and tone settings are left alone.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.inhale_secs = preset.inhale;
        self.hold_secs = preset.hold;
        self.exhale_secs = preset.exhale;
        self.pause_secs = preset.pause;
        self.hold_enabled = preset.hold_enabled;
        self.pause_enabled = preset.pause_enabled;
    }
}

/// A named breathing pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    /// Identifier used on the command line
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Alternative identifiers
    pub aliases: &'static [&'static str],
    /// Inhale seconds
    pub inhale: f64,
    /// Hold seconds
    pub hold: f64,
    /// Exhale seconds
    pub exhale: f64,
    /// Pause seconds
    pub pause: f64,
    /// Hold phase on
    pub hold_enabled: bool,
    /// Pause phase on
    pub pause_enabled: bool,
}

impl Preset {
    /// 5.5s in, 5.5s out.
    pub const PERFECT: Self = Self {
        id: "perfect",
        name: "Perfect Breathing",
        aliases: &["coherent", "resonant"],
        inhale: 5.5,
        hold: 0.0,
        exhale: 5.5,
        pause: 0.0,
        hold_enabled: false,
        pause_enabled: false,
    };

    /// Four equal sides of 4s.
    pub const BOX: Self = Self {
        id: "box",
        name: "Box Breathing",
        aliases: &["square"],
        inhale: 4.0,
        hold: 4.0,
        exhale: 4.0,
        pause: 4.0,
        hold_enabled: true,
        pause_enabled: true,
    };

    /// Box breathing with a longer exhale and shorter pause.
    pub const EXTENDED_BOX: Self = Self {
        id: "extended-box",
        name: "Extended Box Breathing",
        aliases: &["ebox"],
        inhale: 4.0,
        hold: 4.0,
        exhale: 6.0,
        pause: 2.0,
        hold_enabled: true,
        pause_enabled: true,
    };

    /// 4s in, 6s out, no holds.
    pub const EXTENDED_EXHALE: Self = Self {
        id: "extended-exhale",
        name: "Extended Exhale",
        aliases: &["exhale"],
        inhale: 4.0,
        hold: 0.0,
        exhale: 6.0,
        pause: 0.0,
        hold_enabled: false,
        pause_enabled: false,
    };

    /// 4s in, 7s hold, 8s out.
    pub const FOUR_SEVEN_EIGHT: Self = Self {
        id: "4-7-8",
        name: "4-7-8 Breathing",
        aliases: &["478", "relax"],
        inhale: 4.0,
        hold: 7.0,
        exhale: 8.0,
        pause: 0.0,
        hold_enabled: true,
        pause_enabled: false,
    };

    /// Every built-in preset, in menu order.
    pub const ALL: [Self; 5] = [
        Self::PERFECT,
        Self::BOX,
        Self::EXTENDED_BOX,
        Self::EXTENDED_EXHALE,
        Self::FOUR_SEVEN_EIGHT,
    ];

    /// Look up a preset by id or alias (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `PacerError::NotFound` if nothing matches.
    pub fn find(name: &str) -> Result<&'static Self, PacerError> {
        let name = name.trim();
        let all: &'static [Self] = &Self::ALL;
        all.iter()
            .find(|p| {
                p.id.eq_ignore_ascii_case(name)
                    || p.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|p| p.id).collect();
                PacerError::NotFound(format!(
                    "preset '{name}' (known presets: {})",
                    known.join(", ")
                ))
            })
    }

    /// Configuration for this preset with tones off and no session limit.
    #[must_use]
    pub const fn config(&self) -> PacerConfig {
        PacerConfig {
            inhale_secs: self.inhale,
            hold_secs: self.hold,
            exhale_secs: self.exhale,
            pause_secs: self.pause,
            hold_enabled: self.hold_enabled,
            pause_enabled: self.pause_enabled,
            session_minutes: None,
            tone_on_phase_change: false,
        }
    }

    /// Compact timing summary, e.g. "4-4-4-4" or "5.5-5.5".
    #[must_use]
    pub fn timing_summary(&self) -> String {
        let mut parts = vec![self.inhale];
        if self.hold_enabled {
            parts.push(self.hold);
        }
        parts.push(self.exhale);
        if self.pause_enabled {
            parts.push(self.pause);
        }
        parts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset() {
        assert_eq!(Preset::find("box").unwrap().id, "box");
        assert_eq!(Preset::find("BOX").unwrap().id, "box");
        assert_eq!(Preset::find("478").unwrap().id, "4-7-8");
        assert_eq!(Preset::find(" coherent ").unwrap().id, "perfect");
    }

    #[test]
    fn test_find_unknown_preset() {
        let err = Preset::find("triangle").unwrap_err();
        assert!(matches!(err, PacerError::NotFound(_)));
        assert!(err.to_string().contains("extended-box"));
    }

    #[test]
    fn test_cycle_seconds() {
        assert_eq!(Preset::BOX.config().cycle_seconds(), 16.0);
        assert_eq!(Preset::PERFECT.config().cycle_seconds(), 11.0);
        assert_eq!(Preset::FOUR_SEVEN_EIGHT.config().cycle_seconds(), 19.0);
        assert_eq!(Preset::EXTENDED_BOX.config().cycle_seconds(), 16.0);
    }

    #[test]
    fn test_disabled_phases_do_not_count() {
        let mut config = Preset::BOX.config();
        config.hold_enabled = false;
        assert_eq!(config.cycle_seconds(), 12.0);
        assert!(!config.is_enabled(PhaseKind::Hold));
        assert!(config.is_enabled(PhaseKind::Pause));
    }

    #[test]
    fn test_cycles_per_minute() {
        let config = Preset::BOX.config();
        assert_eq!(config.cycles_per_minute(), Some(3.75));
        assert_eq!(
            config.format_cycles_per_minute(),
            "Average Cycles per Minute: 3.75"
        );

        assert_eq!(
            Preset::PERFECT.config().format_cycles_per_minute(),
            "Average Cycles per Minute: 5.45"
        );
    }

    #[test]
    fn test_cycles_per_minute_empty_cycle() {
        let mut config = Preset::PERFECT.config();
        config.inhale_secs = 0.0;
        config.exhale_secs = 0.0;
        assert_eq!(config.cycles_per_minute(), None);
        assert_eq!(
            config.format_cycles_per_minute(),
            "Average Cycles per Minute: -"
        );
    }

    #[test]
    fn test_apply_preset_keeps_session() {
        let mut config = Preset::BOX.config();
        config.session_minutes = Some(5.0);
        config.tone_on_phase_change = true;

        config.apply_preset(&Preset::FOUR_SEVEN_EIGHT);

        assert_eq!(config.hold_secs, 7.0);
        assert!(!config.pause_enabled);
        assert_eq!(config.session_minutes, Some(5.0));
        assert!(config.tone_on_phase_change);
    }

    #[test]
    fn test_session_target() {
        let mut config = PacerConfig::default();
        assert_eq!(config.session_target_ms(), None);
        config.session_minutes = Some(1.5);
        assert_eq!(config.session_target_ms(), Some(90_000));
    }

    #[test]
    fn test_timing_summary() {
        assert_eq!(Preset::BOX.timing_summary(), "4-4-4-4");
        assert_eq!(Preset::PERFECT.timing_summary(), "5.5-5.5");
        assert_eq!(Preset::FOUR_SEVEN_EIGHT.timing_summary(), "4-7-8");
    }
}
