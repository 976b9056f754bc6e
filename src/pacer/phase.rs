//! Breathing phases and the sequencer that orders them.

use serde::{Deserialize, Serialize};

/// One segment of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    /// Breathe in
    Inhale,
    /// Hold after inhaling (optional)
    Hold,
    /// Breathe out
    Exhale,
    /// Rest after exhaling (optional)
    Pause,
}

impl PhaseKind {
    /// All phases in cycle order.
    pub const ALL: [Self; 4] = [Self::Inhale, Self::Hold, Self::Exhale, Self::Pause];

    /// Short label shown while the phase is running.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inhale => "In",
            Self::Hold => "Hold",
            Self::Exhale => "Out",
            Self::Pause => "Pause",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Get the phase that follows `current`.
///
/// Hold only follows Inhale when `hold_enabled`; Pause only follows Exhale
/// when `pause_enabled`.
#[must_use]
pub const fn next_phase(current: PhaseKind, hold_enabled: bool, pause_enabled: bool) -> PhaseKind {
    match current {
        PhaseKind::Inhale if hold_enabled => PhaseKind::Hold,
        PhaseKind::Inhale | PhaseKind::Hold => PhaseKind::Exhale,
        PhaseKind::Exhale if pause_enabled => PhaseKind::Pause,
        PhaseKind::Exhale | PhaseKind::Pause => PhaseKind::Inhale,
    }
}

/// Per-phase durations in milliseconds, fixed for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDurations {
    /// Inhale duration
    pub inhale_ms: u64,
    /// Hold duration
    pub hold_ms: u64,
    /// Exhale duration
    pub exhale_ms: u64,
    /// Pause duration
    pub pause_ms: u64,
}

impl PhaseDurations {
    /// Build durations from per-phase seconds.
    ///
    /// Fractions are kept to the millisecond. Negative and NaN inputs become 0.
    #[must_use]
    pub fn from_seconds(inhale: f64, hold: f64, exhale: f64, pause: f64) -> Self {
        Self {
            inhale_ms: seconds_to_ms(inhale),
            hold_ms: seconds_to_ms(hold),
            exhale_ms: seconds_to_ms(exhale),
            pause_ms: seconds_to_ms(pause),
        }
    }

    /// Duration of a single phase.
    #[must_use]
    pub const fn of(&self, phase: PhaseKind) -> u64 {
        match phase {
            PhaseKind::Inhale => self.inhale_ms,
            PhaseKind::Hold => self.hold_ms,
            PhaseKind::Exhale => self.exhale_ms,
            PhaseKind::Pause => self.pause_ms,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seconds_to_ms(seconds: f64) -> u64 {
    // `as` saturates: NaN and negatives land on 0
    (seconds * 1000.0).round() as u64
}
