//! Display sink contract and time formatting.

use super::phase::PhaseKind;

/// A single change the pacer pushes to whatever renders it.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    /// New phase label; `None` clears it.
    Phase(Option<PhaseKind>),
    /// Progress through the current phase (0.0 - 1.0).
    Progress(f64),
    /// Elapsed time in the current phase, already formatted.
    PhaseElapsed(String),
    /// Session countdown text; `None` hides the countdown.
    SessionRemaining(Option<String>),
    /// Whether a run is in progress (start/stop control).
    Running(bool),
}

/// Receives display updates from the controller.
pub trait DisplaySink {
    /// Apply one update.
    fn render(&mut self, update: DisplayUpdate);
}

impl DisplaySink for Vec<DisplayUpdate> {
    fn render(&mut self, update: DisplayUpdate) {
        self.push(update);
    }
}

impl<D: DisplaySink + ?Sized> DisplaySink for Box<D> {
    fn render(&mut self, update: DisplayUpdate) {
        (**self).render(update);
    }
}

/// Latest value of every display field.
#[derive(Debug, Clone, PartialEq)]
pub struct PacerView {
    /// Current phase, if running
    pub phase: Option<PhaseKind>,
    /// Progress through the phase
    pub progress: f64,
    /// Formatted elapsed phase time
    pub phase_elapsed: String,
    /// Session countdown, if a session is active
    pub session_remaining: Option<String>,
    /// Whether a run is in progress
    pub running: bool,
}

impl Default for PacerView {
    fn default() -> Self {
        Self {
            phase: None,
            progress: 0.0,
            phase_elapsed: format_time(0),
            session_remaining: None,
            running: false,
        }
    }
}

impl DisplaySink for PacerView {
    fn render(&mut self, update: DisplayUpdate) {
        match update {
            DisplayUpdate::Phase(phase) => self.phase = phase,
            DisplayUpdate::Progress(p) => self.progress = p,
            DisplayUpdate::PhaseElapsed(text) => self.phase_elapsed = text,
            DisplayUpdate::SessionRemaining(text) => self.session_remaining = text,
            DisplayUpdate::Running(running) => self.running = running,
        }
    }
}

/// Format phase time as `seconds.decisecond` (3250 ms → "3.2").
#[must_use]
pub fn format_time(millis: u64) -> String {
    let seconds = millis / 1000;
    let deciseconds = (millis % 1000) / 100;
    format!("{seconds}.{deciseconds}")
}

/// Format session time as `M:SS` (125000 ms → "2:05").
///
/// Zero and negative values read "0:00".
#[must_use]
pub fn format_session_time(millis: i64) -> String {
    if millis <= 0 {
        return "0:00".to_string();
    }
    let total_seconds = millis / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}
