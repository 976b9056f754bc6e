//! Phase clock and the fixed-period tickers that drive it.

use super::display::format_time;

/// Elapsed time within the current phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseClock {
    elapsed_ms: u64,
}

impl PhaseClock {
    /// Create a clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed_ms: 0 }
    }

    /// Advance the clock.
    pub fn tick(&mut self, delta_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    /// Back to zero for the next phase.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Milliseconds spent in the phase so far.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Get progress through a phase of `phase_ms` as a fraction (0.0 - 1.0).
    ///
    /// A zero-length phase is always complete.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, phase_ms: u64) -> f64 {
        if phase_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms as f64 / phase_ms as f64).min(1.0)
    }

    /// Check whether a phase of `phase_ms` is over.
    #[must_use]
    pub const fn is_complete(&self, phase_ms: u64) -> bool {
        self.elapsed_ms >= phase_ms
    }

    /// Format elapsed time as seconds and deciseconds.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        format_time(self.elapsed_ms)
    }
}

/// A repeating countdown that fires once per period.
///
/// Tickers never fire on their own; the owner feeds them elapsed time and
/// reacts when [`Ticker::elapse`] reports a firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period_ms: u64,
    until_next_ms: u64,
}

impl Ticker {
    /// Create a ticker whose first firing is one full period away.
    ///
    /// A zero period is raised to 1 ms so the ticker always makes progress.
    #[must_use]
    pub fn new(period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            until_next_ms: period_ms,
        }
    }

    /// Period between firings.
    #[must_use]
    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Time left until the next firing.
    #[must_use]
    pub const fn until_next_ms(&self) -> u64 {
        self.until_next_ms
    }

    /// Let `step_ms` pass. Returns true if the ticker fired.
    ///
    /// `step_ms` must not exceed [`Ticker::until_next_ms`].
    pub fn elapse(&mut self, step_ms: u64) -> bool {
        debug_assert!(step_ms <= self.until_next_ms);
        self.until_next_ms = self.until_next_ms.saturating_sub(step_ms);
        if self.until_next_ms == 0 {
            self.until_next_ms = self.period_ms;
            true
        } else {
            false
        }
    }
}
