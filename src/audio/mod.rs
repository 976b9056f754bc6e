//! Audio cues for the pacer.
//!
//! The controller only knows the [`TonePlayer`] contract. Backends decide how
//! (or whether) a tone becomes sound.

mod bell;
#[cfg(feature = "audio")]
mod synth;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pacer::PhaseKind;

pub use bell::{BellTonePlayer, SilentTonePlayer};
#[cfg(feature = "audio")]
pub use synth::SynthTonePlayer;

/// Failure inside a tone backend. Never fatal to the pacer.
#[derive(Debug, Error)]
pub enum ToneError {
    /// No output device could be opened.
    #[error("Audio output unavailable: {0}")]
    Unavailable(String),

    /// The backend failed while starting playback.
    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Tone colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timbre {
    /// Plain sine with a short linear attack and linear release
    Sine,
    /// Sine plus a 2.5x harmonic with exponential decay
    Bell,
}

/// A tone request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Fundamental frequency in Hz
    pub frequency_hz: f32,
    /// How long the tone sounds
    pub duration: Duration,
    /// Delay before the tone starts, relative to the request
    pub onset: Duration,
    /// Tone colour
    pub timbre: Timbre,
}

impl Tone {
    /// A sine tone starting immediately.
    #[must_use]
    pub const fn sine(frequency_hz: f32, duration: Duration) -> Self {
        Self {
            frequency_hz,
            duration,
            onset: Duration::ZERO,
            timbre: Timbre::Sine,
        }
    }

    /// A bell tone starting after `onset`.
    #[must_use]
    pub const fn bell(frequency_hz: f32, duration: Duration, onset: Duration) -> Self {
        Self {
            frequency_hz,
            duration,
            onset,
            timbre: Timbre::Bell,
        }
    }
}

/// Something that can make (or pretend to make) sound.
#[cfg_attr(test, mockall::automock)]
pub trait TonePlayer {
    /// Start a tone. Tones with an onset begin later without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot play the tone.
    fn play(&mut self, tone: &Tone) -> Result<(), ToneError>;

    /// Cut off anything currently playing or scheduled.
    fn silence(&mut self);

    /// Block until every started or scheduled tone has finished.
    fn wait_idle(&mut self) {}
}

impl<T: TonePlayer + ?Sized> TonePlayer for Box<T> {
    fn play(&mut self, tone: &Tone) -> Result<(), ToneError> {
        (**self).play(tone)
    }

    fn silence(&mut self) {
        (**self).silence();
    }

    fn wait_idle(&mut self) {
        (**self).wait_idle();
    }
}

/// Length of a phase-change tone.
pub const PHASE_TONE_DURATION: Duration = Duration::from_secs(2);

/// Frequency announcing each phase (D4, E4, G4, A4).
#[must_use]
pub const fn phase_frequency(phase: PhaseKind) -> f32 {
    match phase {
        PhaseKind::Inhale => 293.66,
        PhaseKind::Hold => 329.63,
        PhaseKind::Exhale => 392.0,
        PhaseKind::Pause => 440.0,
    }
}

/// Tone played when `phase` begins.
#[must_use]
pub const fn phase_tone(phase: PhaseKind) -> Tone {
    Tone::sine(phase_frequency(phase), PHASE_TONE_DURATION)
}

/// Three ascending bells (A3, E4, A4) marking the end of a session.
#[must_use]
pub const fn session_end_cue() -> [Tone; 3] {
    [
        Tone::bell(220.0, Duration::from_millis(2500), Duration::ZERO),
        Tone::bell(330.0, Duration::from_millis(2500), Duration::from_secs(1)),
        Tone::bell(440.0, Duration::from_millis(3500), Duration::from_secs(2)),
    ]
}

/// Which backend the binary should build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AudioBackend {
    /// No sound at all
    Silent,
    /// Terminal bell character
    #[default]
    Bell,
    /// Synthesized tones (requires the `audio` feature)
    Synth,
}

/// Build the player for `backend`.
///
/// Falls back to the terminal bell when synthesis is unavailable.
#[must_use]
pub fn build_player(backend: AudioBackend) -> Box<dyn TonePlayer> {
    match backend {
        AudioBackend::Silent => Box::new(SilentTonePlayer),
        AudioBackend::Bell => Box::new(BellTonePlayer::stdout()),
        AudioBackend::Synth => build_synth(),
    }
}

#[cfg(feature = "audio")]
fn build_synth() -> Box<dyn TonePlayer> {
    match SynthTonePlayer::new() {
        Ok(player) => Box::new(player),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to terminal bell");
            Box::new(BellTonePlayer::stdout())
        }
    }
}

#[cfg(not(feature = "audio"))]
fn build_synth() -> Box<dyn TonePlayer> {
    tracing::warn!("built without the `audio` feature, falling back to terminal bell");
    Box::new(BellTonePlayer::stdout())
}
