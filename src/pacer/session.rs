//! Session timer.
//!
//! Tracks total exercise time against a target. Once the target is reached
//! the session is "finishing its last round": the controller keeps pacing
//! until the next cycle boundary, then ends the run.

use super::display::format_session_time;

/// Countdown text shown once the target has been reached.
pub const FINISHING_LABEL: &str = "Finishing last round...";

/// Accumulates session time while active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTimer {
    active: bool,
    target_ms: u64,
    elapsed_ms: u64,
}

impl SessionTimer {
    /// Create an inactive timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            target_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// Start timing towards `target_ms`.
    pub fn start(&mut self, target_ms: u64) {
        self.active = true;
        self.target_ms = target_ms;
        self.elapsed_ms = 0;
    }

    /// Add elapsed time. Ignored while inactive.
    pub fn tick(&mut self, delta_ms: u64) {
        if self.active {
            self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        }
    }

    /// Deactivate and clear the accumulator.
    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed_ms = 0;
    }

    /// Whether the session is being timed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Target duration in milliseconds.
    #[must_use]
    pub const fn target_ms(&self) -> u64 {
        self.target_ms
    }

    /// Time accumulated so far.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Time left before the target. Negative once overdue.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn remaining_ms(&self) -> i64 {
        self.target_ms as i64 - self.elapsed_ms as i64
    }

    /// Check if the target has been reached.
    #[must_use]
    pub const fn is_overdue(&self) -> bool {
        self.remaining_ms() <= 0
    }

    /// Countdown text for display, or `None` when no session is running.
    #[must_use]
    pub fn countdown_label(&self) -> Option<String> {
        if !self.active {
            return None;
        }
        if self.is_overdue() {
            Some(FINISHING_LABEL.to_string())
        } else {
            Some(format_session_time(self.remaining_ms()))
        }
    }
}
