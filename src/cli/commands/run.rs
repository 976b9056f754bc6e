//! The `run` command.
//!
//! Resolves the run configuration from the config file and flags, then
//! drives the pacer in one of three modes: the full-screen TUI, a real-time
//! line transcript, or a simulated clock that prints a whole session at once.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::audio::{build_player, SilentTonePlayer, TonePlayer};
use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::error::PacerError;
use crate::output::{format_clock, to_json, TranscriptSink};
use crate::pacer::{BreathingController, PacerConfig, PacerTiming, Preset};
use crate::tui;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the preset is unknown, the terminal cannot be set up,
/// or the transcript cannot be written.
pub fn run(args: &RunArgs, settings: &Config, format: OutputFormat) -> Result<String, PacerError> {
    let (config, preset) = resolve_run_config(args, settings)?;
    let timing = settings.pacer;

    if args.simulate {
        return simulate(&config, timing, format);
    }

    let backend = args.audio.unwrap_or(settings.audio.backend);
    let player = build_player(backend);
    if args.headless {
        headless(&config, timing, player, io::stdout())
    } else {
        tui::run(config, preset, timing, player)
    }
}

/// Build the run configuration.
///
/// Starts from the configured defaults, switches to `--preset` if given,
/// then applies per-phase overrides. The preset is dropped from the result
/// once any timing is overridden.
///
/// # Errors
///
/// Returns `PacerError::NotFound` if a preset name is unknown.
pub fn resolve_run_config(
    args: &RunArgs,
    settings: &Config,
) -> Result<(PacerConfig, Option<&'static Preset>), PacerError> {
    let mut config = settings.default_run()?;
    let mut preset = Preset::find(&settings.defaults.preset)?;
    if let Some(ref name) = args.preset {
        preset = Preset::find(name)?;
        config.apply_preset(preset);
    }

    let mut custom = false;
    if let Some(secs) = args.inhale {
        config.inhale_secs = secs;
        custom = true;
    }
    if let Some(secs) = args.exhale {
        config.exhale_secs = secs;
        custom = true;
    }
    if let Some(secs) = args.hold {
        config.hold_secs = secs;
        config.hold_enabled = true;
        custom = true;
    }
    if args.no_hold {
        config.hold_enabled = false;
        custom = true;
    }
    if let Some(secs) = args.pause {
        config.pause_secs = secs;
        config.pause_enabled = true;
        custom = true;
    }
    if args.no_pause {
        config.pause_enabled = false;
        custom = true;
    }

    if args.session.is_some() {
        config.session_minutes = args.session;
    }
    if args.tones {
        config.tone_on_phase_change = true;
    }
    if args.no_tones {
        config.tone_on_phase_change = false;
    }

    Ok((config, (!custom).then_some(preset)))
}

/// Summary of a simulated session.
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    /// Configuration the session ran with
    pub config: PacerConfig,
    /// Full cycles breathed
    pub cycles_completed: u64,
    /// Simulated time until the session ended
    pub duration_ms: u64,
}

/// Run a whole session against a simulated clock.
///
/// # Errors
///
/// Returns an error if no session length is set, the session does not end
/// in time, or output cannot be written.
pub fn simulate(
    config: &PacerConfig,
    timing: PacerTiming,
    format: OutputFormat,
) -> Result<String, PacerError> {
    let target_ms = config.session_target_ms().ok_or_else(|| {
        PacerError::InvalidArgument("simulation needs a session length".to_string())
    })?;
    let limit_ms = simulation_limit_ms(config, timing, target_ms);

    let mut ctrl = BreathingController::with_timing(
        timing,
        SilentTonePlayer,
        TranscriptSink::new(Vec::new()),
    );
    ctrl.start(config);

    let mut now_ms = 0;
    while let Some(step) = ctrl.next_event_in() {
        if now_ms + step > limit_ms {
            ctrl.stop();
            return Err(PacerError::InvalidArgument(format!(
                "session did not end within {}",
                format_clock(limit_ms)
            )));
        }
        now_ms += step;
        ctrl.display_mut().set_clock(now_ms);
        ctrl.advance(step);
    }

    if let Some(e) = ctrl.display_mut().take_error() {
        return Err(e.into());
    }
    let cycles = ctrl.cycles_completed();
    info!(cycles, duration_ms = now_ms, "simulation finished");

    match format {
        OutputFormat::Json => to_json(&SimulationReport {
            config: *config,
            cycles_completed: cycles,
            duration_ms: now_ms,
        }),
        OutputFormat::Pretty => {
            let transcript = ctrl.into_display().into_inner();
            let text = String::from_utf8_lossy(&transcript).into_owned();
            Ok(format!("{text}{}", completion_line(cycles, now_ms)))
        }
    }
}

/// Longest a simulated session may take: the target plus two worst-case
/// cycles.
fn simulation_limit_ms(config: &PacerConfig, timing: PacerTiming, target_ms: u64) -> u64 {
    let durations = config.durations();
    let per_phase = timing.tick_ms + timing.transition_hold_ms;
    let cycle_ms = durations.inhale_ms
        + durations.hold_ms
        + durations.exhale_ms
        + durations.pause_ms
        + 4 * per_phase;
    target_ms
        .saturating_add(cycle_ms.saturating_mul(2))
        .saturating_add(timing.session_tick_ms)
}

/// Pace in real time, printing phase changes as lines on `out`.
///
/// Returns once the session has ended and its closing cue has played out.
#[allow(clippy::cast_possible_truncation)]
fn headless<P: TonePlayer, W: Write>(
    config: &PacerConfig,
    timing: PacerTiming,
    player: P,
    out: W,
) -> Result<String, PacerError> {
    let mut ctrl = BreathingController::with_timing(timing, player, TranscriptSink::new(out));
    let started = Instant::now();
    let mut consumed_ms = 0;
    ctrl.start(config);

    while ctrl.is_running() {
        thread::sleep(Duration::from_millis(timing.tick_ms));
        let now_ms = started.elapsed().as_millis() as u64;
        ctrl.display_mut().set_clock(now_ms);
        ctrl.advance(now_ms - consumed_ms);
        consumed_ms = now_ms;

        if let Some(e) = ctrl.display_mut().take_error() {
            ctrl.stop();
            return Err(e.into());
        }
    }

    // Dropping the player cuts off anything still sounding
    ctrl.wait_for_tones();
    Ok(completion_line(ctrl.cycles_completed(), consumed_ms))
}

/// Final line of a headless session.
#[must_use]
pub fn completion_line(cycles: u64, duration_ms: u64) -> String {
    let noun = if cycles == 1 { "cycle" } else { "cycles" };
    format!(
        "Session complete after {cycles} {noun} ({})",
        format_clock(duration_ms)
    )
}
