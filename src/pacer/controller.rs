//! Breathing controller.
//!
//! Owns the phase clock, the session timer and the pending phase transition
//! of a single run. Nothing here reads a real clock: callers feed elapsed time
//! through [`BreathingController::advance`], so a terminal loop, a simulated
//! clock and a unit test all drive the same code.
//!
//! Events that fall due at the same instant fire in a fixed order: session
//! tick, phase tick, then transition completion.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::clock::{PhaseClock, Ticker};
use super::display::{format_time, DisplaySink, DisplayUpdate};
use super::pattern::PacerConfig;
use super::phase::{next_phase, PhaseDurations, PhaseKind};
use super::session::SessionTimer;
use crate::audio::{phase_tone, session_end_cue, Tone, TonePlayer};

/// Tick periods and the completion hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacerTiming {
    /// Phase clock resolution in milliseconds.
    pub tick_ms: u64,
    /// Session timer resolution in milliseconds.
    pub session_tick_ms: u64,
    /// How long a finished phase stays at 100% before the next one starts.
    pub transition_hold_ms: u64,
}

impl Default for PacerTiming {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            session_tick_ms: 100,
            transition_hold_ms: 200,
        }
    }
}

/// Controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No run in progress
    Idle,
    /// Pacing a run
    Running,
    /// Tearing a run down (only observable from inside `stop`)
    Stopping,
}

/// What a call to [`BreathingController::start`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// A new run began
    Started,
    /// The running run was stopped instead
    Stopped,
}

/// Snapshot of the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    /// Phase being paced, `None` when idle
    pub current_phase: Option<PhaseKind>,
    /// Time spent in that phase
    pub elapsed_in_phase_ms: u64,
    /// A finished phase is being held at 100%
    pub is_transitioning: bool,
    /// A run is in progress
    pub is_running: bool,
}

#[derive(Debug)]
struct ActiveRun {
    durations: PhaseDurations,
    hold_enabled: bool,
    pause_enabled: bool,
    tones: bool,
    phase: PhaseKind,
    clock: PhaseClock,
    phase_ticker: Ticker,
    session_ticker: Option<Ticker>,
    transition_due_in: Option<u64>,
    cycles_completed: u64,
}

/// Paces breathing phases and ends sessions on a cycle boundary.
pub struct BreathingController<T: TonePlayer, D: DisplaySink> {
    timing: PacerTiming,
    tone: T,
    display: D,
    state: ControllerState,
    run: Option<ActiveRun>,
    session: SessionTimer,
    last_run_cycles: u64,
}

impl<T: TonePlayer, D: DisplaySink> BreathingController<T, D> {
    /// Create an idle controller with default timing.
    pub fn new(tone: T, display: D) -> Self {
        Self::with_timing(PacerTiming::default(), tone, display)
    }

    /// Create an idle controller with custom timing.
    pub fn with_timing(timing: PacerTiming, tone: T, display: D) -> Self {
        Self {
            timing,
            tone,
            display,
            state: ControllerState::Idle,
            run: None,
            session: SessionTimer::new(),
            last_run_cycles: 0,
        }
    }

    /// Start a run, or stop the current one if already running.
    pub fn start(&mut self, config: &PacerConfig) -> Toggle {
        if self.state != ControllerState::Idle {
            self.stop();
            return Toggle::Stopped;
        }

        self.session = SessionTimer::new();
        self.last_run_cycles = 0;
        let session_ticker = config.session_target_ms().map(|target_ms| {
            self.session.start(target_ms);
            Ticker::new(self.timing.session_tick_ms)
        });

        self.run = Some(ActiveRun {
            durations: config.durations(),
            hold_enabled: config.hold_enabled,
            pause_enabled: config.pause_enabled,
            tones: config.tone_on_phase_change,
            phase: PhaseKind::Inhale,
            clock: PhaseClock::new(),
            phase_ticker: Ticker::new(self.timing.tick_ms),
            session_ticker,
            transition_due_in: None,
            cycles_completed: 0,
        });
        self.state = ControllerState::Running;

        info!(
            cycle_secs = config.cycle_seconds(),
            session_ms = ?config.session_target_ms(),
            hold = config.hold_enabled,
            pause = config.pause_enabled,
            "pacer started"
        );

        self.announce_phase(PhaseKind::Inhale);
        self.display.render(DisplayUpdate::Progress(0.0));
        self.display.render(DisplayUpdate::PhaseElapsed(format_time(0)));
        self.display
            .render(DisplayUpdate::SessionRemaining(self.session.countdown_label()));
        self.display.render(DisplayUpdate::Running(true));

        Toggle::Started
    }

    /// Stop the run, dropping every pending tick and transition.
    ///
    /// Does nothing when idle.
    pub fn stop(&mut self) {
        if self.state == ControllerState::Idle {
            return;
        }
        self.state = ControllerState::Stopping;

        let cycles = self.run.take().map_or(0, |run| run.cycles_completed);
        self.last_run_cycles = cycles;
        self.session.stop();

        self.display.render(DisplayUpdate::Progress(0.0));
        self.display.render(DisplayUpdate::PhaseElapsed(format_time(0)));
        self.display.render(DisplayUpdate::SessionRemaining(None));
        self.display.render(DisplayUpdate::Phase(None));
        self.display.render(DisplayUpdate::Running(false));

        self.state = ControllerState::Idle;
        info!(cycles, "pacer stopped");
    }

    /// Let `delta_ms` of time pass, firing every tick and transition due
    /// within it in order.
    pub fn advance(&mut self, delta_ms: u64) {
        let mut budget = delta_ms;
        while budget > 0 {
            let Some(next) = self.next_event_in() else {
                return;
            };
            let step = next.min(budget);
            budget -= step;
            self.elapse(step);
        }
    }

    /// Time until the next tick or transition, `None` when idle.
    #[must_use]
    pub fn next_event_in(&self) -> Option<u64> {
        let run = self.run.as_ref()?;
        let mut next = run.phase_ticker.until_next_ms();
        if let Some(ticker) = &run.session_ticker {
            next = next.min(ticker.until_next_ms());
        }
        if let Some(due) = run.transition_due_in {
            next = next.min(due);
        }
        Some(next)
    }

    fn elapse(&mut self, step_ms: u64) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        let session_due = run
            .session_ticker
            .as_mut()
            .is_some_and(|ticker| ticker.elapse(step_ms));
        let phase_due = run.phase_ticker.elapse(step_ms);
        let transition_due = run.transition_due_in.as_mut().is_some_and(|due| {
            *due = due.saturating_sub(step_ms);
            *due == 0
        });

        if session_due {
            self.on_session_tick();
        }
        if phase_due {
            self.on_phase_tick();
        }
        if transition_due {
            self.finish_transition();
        }
    }

    fn on_session_tick(&mut self) {
        self.session.tick(self.timing.session_tick_ms);
        self.display
            .render(DisplayUpdate::SessionRemaining(self.session.countdown_label()));
    }

    fn on_phase_tick(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.transition_due_in.is_some() {
            return;
        }

        run.clock.tick(self.timing.tick_ms);
        let phase_ms = run.durations.of(run.phase);
        let complete = run.clock.is_complete(phase_ms);
        let progress = if complete {
            1.0
        } else {
            run.clock.progress(phase_ms)
        };
        let elapsed = run.clock.format_elapsed();
        if complete {
            run.transition_due_in = Some(self.timing.transition_hold_ms);
            debug!(phase = %run.phase, elapsed_ms = run.clock.elapsed_ms(), "phase complete");
        }

        self.display.render(DisplayUpdate::PhaseElapsed(elapsed));
        self.display.render(DisplayUpdate::Progress(progress));

        if complete && self.timing.transition_hold_ms == 0 {
            self.finish_transition();
        }
    }

    fn finish_transition(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        run.clock.reset();
        let next = next_phase(run.phase, run.hold_enabled, run.pause_enabled);
        if next == PhaseKind::Inhale {
            run.cycles_completed += 1;
        }
        run.phase = next;
        run.phase_ticker = Ticker::new(self.timing.tick_ms);

        self.announce_phase(next);
        self.display.render(DisplayUpdate::Progress(0.0));

        if self.end_session_if_due() {
            return;
        }
        if let Some(run) = self.run.as_mut() {
            run.transition_due_in = None;
        }
    }

    /// End the run if the session target has passed and a new cycle is just
    /// beginning.
    fn end_session_if_due(&mut self) -> bool {
        let Some(run) = self.run.as_ref() else {
            return false;
        };
        let at_cycle_start = run.phase == PhaseKind::Inhale && run.clock.elapsed_ms() == 0;
        if !(self.session.is_active() && self.session.is_overdue() && at_cycle_start) {
            return false;
        }

        info!(
            elapsed_ms = self.session.elapsed_ms(),
            target_ms = self.session.target_ms(),
            cycles = run.cycles_completed,
            "session complete"
        );

        self.tone.silence();
        for tone in &session_end_cue() {
            self.play(tone);
        }
        self.stop();
        true
    }

    fn announce_phase(&mut self, phase: PhaseKind) {
        debug!(%phase, "phase start");
        self.display.render(DisplayUpdate::Phase(Some(phase)));

        if self.run.as_ref().is_some_and(|run| run.tones) {
            self.tone.silence();
            self.play(&phase_tone(phase));
        }
    }

    fn play(&mut self, tone: &Tone) {
        if let Err(e) = self.tone.play(tone) {
            warn!(error = %e, frequency = tone.frequency_hz, "tone playback failed");
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether a run is in progress.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ControllerState::Running)
    }

    /// Snapshot of the run.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.run.as_ref().map_or_else(RunState::default, |run| RunState {
            current_phase: Some(run.phase),
            elapsed_in_phase_ms: run.clock.elapsed_ms(),
            is_transitioning: run.transition_due_in.is_some(),
            is_running: true,
        })
    }

    /// Session accounting for the run.
    #[must_use]
    pub const fn session(&self) -> &SessionTimer {
        &self.session
    }

    /// Full cycles finished in the current run, or in the last one once
    /// idle.
    #[must_use]
    pub fn cycles_completed(&self) -> u64 {
        self.run
            .as_ref()
            .map_or(self.last_run_cycles, |run| run.cycles_completed)
    }

    /// Whether any tick or transition is still scheduled.
    #[must_use]
    pub const fn has_pending_work(&self) -> bool {
        self.run.is_some()
    }

    /// The display sink.
    pub const fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display sink.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Block until the tone player has finished every queued tone, such as
    /// the session-end cue.
    pub fn wait_for_tones(&mut self) {
        self.tone.wait_idle();
    }

    /// Consume the controller, keeping only the display sink.
    pub fn into_display(self) -> D {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{MockTonePlayer, SilentTonePlayer, ToneError};
    use crate::pacer::pattern::Preset;
    use crate::pacer::session::FINISHING_LABEL;

    type Recorder = BreathingController<SilentTonePlayer, Vec<DisplayUpdate>>;

    fn recorder() -> Recorder {
        BreathingController::new(SilentTonePlayer, Vec::new())
    }

    fn box_session(minutes: f64) -> PacerConfig {
        let mut config = Preset::BOX.config();
        config.session_minutes = Some(minutes);
        config
    }

    fn quiet_mock() -> MockTonePlayer {
        let mut mock = MockTonePlayer::new();
        mock.expect_silence().return_const(());
        mock
    }

    fn phases_announced(updates: &[DisplayUpdate]) -> Vec<PhaseKind> {
        updates
            .iter()
            .filter_map(|u| match u {
                DisplayUpdate::Phase(Some(p)) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_initializes_run() {
        let mut ctrl = recorder();
        assert_eq!(ctrl.start(&Preset::BOX.config()), Toggle::Started);

        assert_eq!(ctrl.state(), ControllerState::Running);
        let run = ctrl.run_state();
        assert_eq!(run.current_phase, Some(PhaseKind::Inhale));
        assert_eq!(run.elapsed_in_phase_ms, 0);
        assert!(!run.is_transitioning);
        assert!(!ctrl.session().is_active());

        let updates = ctrl.display();
        assert_eq!(updates[0], DisplayUpdate::Phase(Some(PhaseKind::Inhale)));
        assert!(updates.contains(&DisplayUpdate::SessionRemaining(None)));
        assert_eq!(updates.last(), Some(&DisplayUpdate::Running(true)));
    }

    #[test]
    fn test_start_while_running_toggles_off() {
        let mut ctrl = recorder();
        ctrl.start(&Preset::BOX.config());
        ctrl.advance(1_000);

        assert_eq!(ctrl.start(&Preset::BOX.config()), Toggle::Stopped);
        assert_eq!(ctrl.state(), ControllerState::Idle);
        assert_eq!(ctrl.run_state(), RunState::default());
    }

    #[test]
    fn test_ticks_advance_phase_clock() {
        let mut ctrl = recorder();
        ctrl.start(&Preset::BOX.config());
        ctrl.advance(2_050);

        assert_eq!(ctrl.run_state().elapsed_in_phase_ms, 2_000);
        assert!(ctrl
            .display()
            .contains(&DisplayUpdate::PhaseElapsed("2.0".to_string())));
        assert!(ctrl.display().contains(&DisplayUpdate::Progress(0.5)));
    }

    #[test]
    fn test_completion_holds_at_full_progress() {
        let mut ctrl = recorder();
        ctrl.start(&Preset::BOX.config());
        ctrl.advance(4_000);

        let run = ctrl.run_state();
        assert!(run.is_transitioning);
        assert_eq!(run.current_phase, Some(PhaseKind::Inhale));
        assert_eq!(ctrl.display().last(), Some(&DisplayUpdate::Progress(1.0)));

        // Ticks during the hold are ignored
        ctrl.display_mut().clear();
        ctrl.advance(199);
        assert!(ctrl.display().is_empty());
        assert_eq!(ctrl.run_state().elapsed_in_phase_ms, 4_000);

        ctrl.advance(1);
        let run = ctrl.run_state();
        assert_eq!(run.current_phase, Some(PhaseKind::Hold));
        assert_eq!(run.elapsed_in_phase_ms, 0);
        assert!(!run.is_transitioning);
        assert_eq!(
            ctrl.display().as_slice(),
            &[
                DisplayUpdate::Phase(Some(PhaseKind::Hold)),
                DisplayUpdate::Progress(0.0)
            ]
        );
    }

    #[test]
    fn test_box_cycle_returns_to_inhale() {
        let mut ctrl = recorder();
        ctrl.start(&Preset::BOX.config());

        // 160 counted ticks plus four 200ms holds
        ctrl.advance(16_000 + 4 * 200);

        let run = ctrl.run_state();
        assert_eq!(run.current_phase, Some(PhaseKind::Inhale));
        assert_eq!(run.elapsed_in_phase_ms, 0);
        assert!(!run.is_transitioning);
        assert_eq!(ctrl.cycles_completed(), 1);
        assert_eq!(
            phases_announced(ctrl.display()),
            vec![
                PhaseKind::Inhale,
                PhaseKind::Hold,
                PhaseKind::Exhale,
                PhaseKind::Pause,
                PhaseKind::Inhale
            ]
        );
    }

    #[test]
    fn test_advance_granularity_does_not_matter() {
        let mut coarse = recorder();
        let mut fine = recorder();
        coarse.start(&Preset::EXTENDED_BOX.config());
        fine.start(&Preset::EXTENDED_BOX.config());

        coarse.advance(37_000);
        for _ in 0..3_700 {
            fine.advance(10);
        }

        assert_eq!(coarse.run_state(), fine.run_state());
        assert_eq!(coarse.display(), fine.display());
    }

    #[test]
    fn test_two_phase_pattern_skips_hold_and_pause() {
        let mut ctrl = recorder();
        ctrl.start(&Preset::PERFECT.config());
        ctrl.advance(60_000);

        let phases = phases_announced(ctrl.display());
        assert!(phases.len() > 4);
        assert!(phases
            .iter()
            .all(|p| matches!(p, PhaseKind::Inhale | PhaseKind::Exhale)));
    }

    #[test]
    fn test_zero_length_phase_completes_next_tick() {
        let mut config = Preset::BOX.config();
        config.hold_secs = 0.0;

        let mut ctrl = recorder();
        ctrl.start(&config);
        ctrl.advance(4_200);
        assert_eq!(ctrl.run_state().current_phase, Some(PhaseKind::Hold));

        ctrl.advance(100);
        assert!(ctrl.run_state().is_transitioning);
        assert_eq!(ctrl.display().last(), Some(&DisplayUpdate::Progress(1.0)));

        ctrl.advance(200);
        assert_eq!(ctrl.run_state().current_phase, Some(PhaseKind::Exhale));
    }

    #[test]
    fn test_session_ends_on_cycle_boundary() {
        let mut mock = quiet_mock();
        mock.expect_play()
            .withf(|t| t.timbre == crate::audio::Timbre::Bell)
            .times(3)
            .returning(|_| Ok(()));

        let mut ctrl = BreathingController::new(mock, Vec::new());
        ctrl.start(&box_session(1.0));
        assert!(ctrl
            .display()
            .contains(&DisplayUpdate::SessionRemaining(Some("1:00".to_string()))));

        // Three cycles take 50.4s: target not reached yet
        ctrl.advance(3 * 16_800);
        assert!(ctrl.is_running());
        assert_eq!(ctrl.cycles_completed(), 3);

        // Target passes mid-cycle: keep breathing
        ctrl.advance(60_000 - 3 * 16_800);
        assert!(ctrl.is_running());
        assert!(ctrl.session().is_overdue());
        assert_eq!(
            ctrl.session().countdown_label().as_deref(),
            Some(FINISHING_LABEL)
        );
        assert_ne!(ctrl.run_state().current_phase, Some(PhaseKind::Inhale));

        // Fourth cycle ends at 67.2s
        ctrl.advance(4 * 16_800 - 60_000 - 1);
        assert!(ctrl.is_running());
        ctrl.advance(1);
        assert_eq!(ctrl.state(), ControllerState::Idle);
        assert!(!ctrl.session().is_active());
        assert_eq!(ctrl.display().last(), Some(&DisplayUpdate::Running(false)));
        assert_eq!(ctrl.cycles_completed(), 4);
    }

    #[test]
    fn test_session_end_never_mid_phase() {
        let mut ctrl = recorder();
        // Target is overdue almost immediately
        ctrl.start(&box_session(0.001));

        let mut ticks = 0;
        while ctrl.is_running() && ticks < 200 {
            ctrl.advance(100);
            ticks += 1;
        }

        // Only the first return to Inhale may end it
        assert!(!ctrl.is_running());
        assert_eq!(
            phases_announced(ctrl.display()),
            vec![
                PhaseKind::Inhale,
                PhaseKind::Hold,
                PhaseKind::Exhale,
                PhaseKind::Pause,
                PhaseKind::Inhale
            ]
        );
    }

    #[test]
    fn test_stop_during_transition() {
        let mut ctrl = recorder();
        ctrl.start(&box_session(5.0));
        ctrl.advance(4_100);
        assert!(ctrl.run_state().is_transitioning);

        ctrl.stop();
        assert_eq!(ctrl.state(), ControllerState::Idle);
        assert_eq!(ctrl.run_state(), RunState::default());
        assert!(!ctrl.session().is_active());
        assert_eq!(ctrl.session().elapsed_ms(), 0);
        assert!(!ctrl.has_pending_work());

        // Nothing fires after stop
        ctrl.display_mut().clear();
        ctrl.advance(60_000);
        assert!(ctrl.display().is_empty());
    }

    #[test]
    fn test_stop_resets_display() {
        let mut ctrl = recorder();
        ctrl.start(&box_session(5.0));
        ctrl.advance(1_000);
        ctrl.display_mut().clear();

        ctrl.stop();
        assert_eq!(
            ctrl.display().as_slice(),
            &[
                DisplayUpdate::Progress(0.0),
                DisplayUpdate::PhaseElapsed("0.0".to_string()),
                DisplayUpdate::SessionRemaining(None),
                DisplayUpdate::Phase(None),
                DisplayUpdate::Running(false),
            ]
        );
    }

    #[test]
    fn test_restart_is_fresh() {
        let mut ctrl = recorder();
        ctrl.start(&box_session(5.0));
        ctrl.advance(30_000);
        ctrl.stop();

        ctrl.start(&box_session(5.0));
        assert_eq!(ctrl.run_state().elapsed_in_phase_ms, 0);
        assert_eq!(ctrl.session().elapsed_ms(), 0);
        assert_eq!(ctrl.cycles_completed(), 0);
    }

    #[test]
    fn test_phase_tones_when_enabled() {
        let mut mock = MockTonePlayer::new();
        mock.expect_silence().times(2).return_const(());
        mock.expect_play()
            .withf(|t| t.frequency_hz == 293.66)
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_play()
            .withf(|t| t.frequency_hz == 329.63)
            .times(1)
            .returning(|_| Ok(()));

        let mut config = Preset::BOX.config();
        config.tone_on_phase_change = true;

        let mut ctrl = BreathingController::new(mock, Vec::new());
        ctrl.start(&config);
        ctrl.advance(4_200);
        assert_eq!(ctrl.run_state().current_phase, Some(PhaseKind::Hold));
    }

    #[test]
    fn test_no_phase_tones_when_disabled() {
        let mut mock = MockTonePlayer::new();
        mock.expect_silence().never();
        mock.expect_play().never();

        let mut ctrl = BreathingController::new(mock, Vec::new());
        ctrl.start(&Preset::BOX.config());
        ctrl.advance(20_000);
    }

    #[test]
    fn test_phase_tick_at_transition_instant_is_dropped() {
        let mut ctrl = recorder();
        ctrl.start(&Preset::BOX.config());

        // Inhale completes at 4.0s; the held tick and the transition both
        // fall due at 4.2s
        ctrl.advance(4_000);
        assert!(ctrl.run_state().is_transitioning);
        ctrl.advance(200);

        let run = ctrl.run_state();
        assert_eq!(run.current_phase, Some(PhaseKind::Hold));
        assert_eq!(run.elapsed_in_phase_ms, 0);
        assert!(!run.is_transitioning);
        assert_eq!(ctrl.next_event_in(), Some(100));

        ctrl.advance(100);
        assert_eq!(ctrl.run_state().elapsed_in_phase_ms, 100);
    }

    #[test]
    fn test_wait_for_tones_reaches_player() {
        let mut mock = quiet_mock();
        mock.expect_play().times(3).returning(|_| Ok(()));
        mock.expect_wait_idle().times(1).return_const(());

        let mut ctrl = BreathingController::new(mock, Vec::new());
        ctrl.start(&box_session(0.25));
        ctrl.advance(16_800);
        assert!(!ctrl.is_running());

        ctrl.wait_for_tones();
    }

    #[test]
    fn test_tone_failure_does_not_stop_pacing() {
        let mut mock = quiet_mock();
        mock.expect_play()
            .returning(|_| Err(ToneError::Unavailable("no device".to_string())));

        let mut config = Preset::BOX.config();
        config.tone_on_phase_change = true;

        let mut ctrl = BreathingController::new(mock, Vec::new());
        ctrl.start(&config);
        ctrl.advance(16_800);

        assert!(ctrl.is_running());
        assert_eq!(ctrl.cycles_completed(), 1);
    }

    #[test]
    fn test_custom_timing() {
        let timing = PacerTiming {
            tick_ms: 50,
            session_tick_ms: 1_000,
            transition_hold_ms: 0,
        };
        let mut ctrl = BreathingController::with_timing(timing, SilentTonePlayer, Vec::new());
        ctrl.start(&box_session(5.0));

        ctrl.advance(4_000);
        assert_eq!(ctrl.run_state().current_phase, Some(PhaseKind::Hold));
        assert!(!ctrl.run_state().is_transitioning);
        assert_eq!(ctrl.session().elapsed_ms(), 4_000);

        ctrl.advance(999);
        assert_eq!(ctrl.session().elapsed_ms(), 4_000);
    }

    #[test]
    fn test_advance_when_idle_is_noop() {
        let mut ctrl = recorder();
        ctrl.advance(10_000);
        assert!(ctrl.display().is_empty());
        ctrl.stop();
        assert!(ctrl.display().is_empty());
    }
}
