//! Line-oriented display for headless runs.
//!
//! Prints one timestamped line per phase change instead of redrawing a
//! progress display.

use std::io::{self, Write};

use crate::output::colored_phase;
use crate::pacer::{DisplaySink, DisplayUpdate, FINISHING_LABEL};

/// Writes phase changes as they happen.
#[derive(Debug)]
pub struct TranscriptSink<W: Write> {
    out: W,
    now_ms: u64,
    finishing_reported: bool,
    error: Option<io::Error>,
}

impl<W: Write> TranscriptSink<W> {
    /// Write the transcript to `out`.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            now_ms: 0,
            finishing_reported: false,
            error: None,
        }
    }

    /// Set the time stamped on subsequent lines.
    pub fn set_clock(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Take the first write error, if any occurred.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        let stamp = format_clock(self.now_ms);
        if let Err(e) = writeln!(self.out, "[{stamp}] {text}").and_then(|()| self.out.flush()) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> DisplaySink for TranscriptSink<W> {
    fn render(&mut self, update: DisplayUpdate) {
        match update {
            DisplayUpdate::Phase(Some(phase)) => {
                let label = colored_phase(phase).to_string();
                self.line(&label);
            }
            DisplayUpdate::SessionRemaining(Some(text)) => {
                if text == FINISHING_LABEL && !self.finishing_reported {
                    self.finishing_reported = true;
                    self.line(FINISHING_LABEL);
                }
            }
            DisplayUpdate::Running(true) => {
                self.finishing_reported = false;
            }
            DisplayUpdate::Running(false) => self.line("Stopped"),
            DisplayUpdate::Phase(None)
            | DisplayUpdate::Progress(_)
            | DisplayUpdate::PhaseElapsed(_)
            | DisplayUpdate::SessionRemaining(None) => {}
        }
    }
}

/// Format a run clock as `M:SS.d` (67200 ms → "1:07.2").
#[must_use]
pub fn format_clock(millis: u64) -> String {
    let total_seconds = millis / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let deciseconds = (millis % 1000) / 100;
    format!("{minutes}:{seconds:02}.{deciseconds}")
}
