//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::audio::TonePlayer;
use crate::pacer::{BreathingController, PacerConfig, PacerTiming, PacerView, Preset, Toggle};

/// Application state.
pub struct App {
    controller: BreathingController<Box<dyn TonePlayer>, PacerView>,
    /// Settings for the next run.
    pub config: PacerConfig,
    /// Preset the settings came from, until edited.
    pub preset: Option<&'static Preset>,
    /// Status message to display.
    pub status: Option<String>,
    /// Completed sessions since launch.
    pub sessions_completed: u32,
    last_advance: Instant,
}

impl App {
    /// Create an app with the pacer idle.
    pub fn new(
        config: PacerConfig,
        preset: Option<&'static Preset>,
        timing: PacerTiming,
        player: Box<dyn TonePlayer>,
    ) -> Self {
        Self {
            controller: BreathingController::with_timing(timing, player, PacerView::default()),
            config,
            preset,
            status: Some("Press Space to start, ? for help".to_string()),
            sessions_completed: 0,
            last_advance: Instant::now(),
        }
    }

    /// What the pacer is showing.
    pub const fn view(&self) -> &PacerView {
        self.controller.display()
    }

    /// Whether a run is in progress.
    pub const fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// Start or stop the pacer.
    pub fn toggle(&mut self) {
        self.toggle_at(Instant::now());
    }

    pub(crate) fn toggle_at(&mut self, now: Instant) {
        self.last_advance = now;
        match self.controller.start(&self.config) {
            Toggle::Started => self.status = None,
            Toggle::Stopped => self.status = Some("Stopped".to_string()),
        }
    }

    /// Stop any run in progress.
    pub fn stop(&mut self) {
        self.controller.stop();
    }

    /// Feed real time into the pacer.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Feed time up to `now` into the pacer.
    ///
    /// Whole milliseconds are consumed; the remainder carries over.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn tick_at(&mut self, now: Instant) {
        let elapsed_ms = now.saturating_duration_since(self.last_advance).as_millis() as u64;
        if elapsed_ms == 0 {
            return;
        }
        self.last_advance += Duration::from_millis(elapsed_ms);

        let was_running = self.controller.is_running();
        self.controller.advance(elapsed_ms);
        if was_running && !self.controller.is_running() {
            self.sessions_completed += 1;
            self.status = Some("Session complete".to_string());
        }
    }

    /// Switch to the preset at `index` in the menu.
    pub fn select_preset(&mut self, index: usize) {
        if !self.ensure_idle() {
            return;
        }
        if let Some(preset) = Preset::ALL.get(index) {
            self.config.apply_preset(preset);
            self.preset = Preset::find(preset.id).ok();
            self.status = Some(format!("Preset: {}", preset.name));
        }
    }

    /// Switch the hold phase on or off.
    pub fn toggle_hold(&mut self) {
        if self.ensure_idle() {
            self.config.hold_enabled = !self.config.hold_enabled;
            self.preset = None;
            self.status = Some(format!("Hold {}", on_off(self.config.hold_enabled)));
        }
    }

    /// Switch the pause phase on or off.
    pub fn toggle_pause(&mut self) {
        if self.ensure_idle() {
            self.config.pause_enabled = !self.config.pause_enabled;
            self.preset = None;
            self.status = Some(format!("Pause {}", on_off(self.config.pause_enabled)));
        }
    }

    /// Switch phase tones on or off.
    pub fn toggle_tones(&mut self) {
        if self.ensure_idle() {
            self.config.tone_on_phase_change = !self.config.tone_on_phase_change;
            self.status = Some(format!(
                "Phase tones {}",
                on_off(self.config.tone_on_phase_change)
            ));
        }
    }

    /// Settings are read once per run; refuse edits while running.
    fn ensure_idle(&mut self) -> bool {
        if self.controller.is_running() {
            self.status = Some("Stop the pacer to change settings".to_string());
            false
        } else {
            true
        }
    }
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
