//! Synthesized tones through the default audio device.

use std::f32::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use super::{Timbre, Tone, ToneError, TonePlayer};

const SAMPLE_RATE: u32 = 44_100;
const SINE_ATTACK_SECS: f32 = 0.01;
const BELL_ATTACK_SECS: f32 = 0.05;
const BELL_PEAK: f32 = 0.6;
const BELL_HARMONIC_PEAK: f32 = 0.2;
const BELL_HARMONIC_RATIO: f32 = 2.5;
const BELL_FLOOR: f32 = 0.001;
const MASTER_GAIN: f32 = 0.5;

/// Plays tones on the system's default output device.
///
/// A new tone cuts off the previous one when it starts, so the notes of a
/// cue follow each other instead of overlapping.
pub struct SynthTonePlayer {
    // Dropping the stream silences every sink
    _stream: OutputStream,
    handle: OutputStreamHandle,
    voices: Vec<Scheduled>,
}

/// A voice handed to rodio, with the handle to cut it short.
struct Scheduled {
    sink: Sink,
    starts_at: Instant,
    cutoff: Arc<AtomicU64>,
}

impl SynthTonePlayer {
    /// Open the default output device.
    ///
    /// # Errors
    ///
    /// Returns an error if no output device is available.
    pub fn new() -> Result<Self, ToneError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| ToneError::Unavailable(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            handle,
            voices: Vec::new(),
        })
    }
}

impl TonePlayer for SynthTonePlayer {
    fn play(&mut self, tone: &Tone) -> Result<(), ToneError> {
        let sink = Sink::try_new(&self.handle).map_err(|e| ToneError::Playback(e.to_string()))?;
        let starts_at = Instant::now() + tone.onset;

        self.voices.retain(|v| !v.sink.empty());
        for earlier in &self.voices {
            let cut = samples_between(earlier.starts_at, starts_at);
            earlier.cutoff.fetch_min(cut, Ordering::Relaxed);
        }

        let voice = Voice::new(*tone);
        let cutoff = Arc::clone(&voice.cutoff);
        sink.append(voice.delay(tone.onset));
        self.voices.push(Scheduled {
            sink,
            starts_at,
            cutoff,
        });
        Ok(())
    }

    fn silence(&mut self) {
        for voice in self.voices.drain(..) {
            voice.sink.stop();
        }
    }

    fn wait_idle(&mut self) {
        for voice in self.voices.drain(..) {
            voice.sink.sleep_until_end();
        }
    }
}

/// Samples from `from` until `to`, zero if `to` is not later.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn samples_between(from: Instant, to: Instant) -> u64 {
    let gap = to.saturating_duration_since(from);
    (gap.as_secs_f64() * f64::from(SAMPLE_RATE)) as u64
}

/// One tone rendered sample by sample.
struct Voice {
    tone: Tone,
    index: u64,
    total: u64,
    // Sample index at which a later tone takes over
    cutoff: Arc<AtomicU64>,
}

impl Voice {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(tone: Tone) -> Self {
        let total = (tone.duration.as_secs_f64() * f64::from(SAMPLE_RATE)) as u64;
        Self {
            tone,
            index: 0,
            total,
            cutoff: Arc::new(AtomicU64::new(u64::MAX)),
        }
    }

    fn sample_at(&self, t: f32) -> f32 {
        let length = self.tone.duration.as_secs_f32();
        let f = self.tone.frequency_hz;

        match self.tone.timbre {
            Timbre::Sine => {
                let gain = if t < SINE_ATTACK_SECS {
                    t / SINE_ATTACK_SECS
                } else {
                    let release = (length - SINE_ATTACK_SECS).max(f32::EPSILON);
                    1.0 - (t - SINE_ATTACK_SECS) / release
                };
                gain.clamp(0.0, 1.0) * (TAU * f * t).sin()
            }
            Timbre::Bell => {
                let shape = if t < BELL_ATTACK_SECS {
                    t / BELL_ATTACK_SECS
                } else {
                    let decay = (length - BELL_ATTACK_SECS).max(f32::EPSILON);
                    let x = ((t - BELL_ATTACK_SECS) / decay).min(1.0);
                    BELL_FLOOR.powf(x)
                };
                BELL_PEAK * shape * (TAU * f * t).sin()
                    + BELL_HARMONIC_PEAK * shape * (TAU * f * BELL_HARMONIC_RATIO * t).sin()
            }
        }
    }
}

impl Iterator for Voice {
    type Item = f32;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f32> {
        if self.index >= self.total || self.index >= self.cutoff.load(Ordering::Relaxed) {
            return None;
        }
        let t = self.index as f32 / SAMPLE_RATE as f32;
        self.index += 1;
        Some(MASTER_GAIN * self.sample_at(t))
    }
}

impl Source for Voice {
    #[allow(clippy::cast_possible_truncation)]
    fn current_frame_len(&self) -> Option<usize> {
        let end = self.total.min(self.cutoff.load(Ordering::Relaxed));
        Some(end.saturating_sub(self.index) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.tone.duration)
    }
}
