//! Terminal-only tone players.

use std::io::{self, Write};

use super::{Tone, ToneError, TonePlayer};

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell once per tone.
///
/// Terminals have no pitch control, so frequency, duration and onset are
/// ignored.
#[derive(Debug)]
pub struct BellTonePlayer<W: Write> {
    out: W,
}

impl BellTonePlayer<io::Stdout> {
    /// Ring the bell on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellTonePlayer<W> {
    /// Ring the bell on `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TonePlayer for BellTonePlayer<W> {
    fn play(&mut self, _tone: &Tone) -> Result<(), ToneError> {
        self.out
            .write_all(BEL)
            .and_then(|()| self.out.flush())
            .map_err(|e| ToneError::Playback(format!("Failed to ring terminal bell: {e}")))
    }

    fn silence(&mut self) {}
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentTonePlayer;

impl TonePlayer for SilentTonePlayer {
    fn play(&mut self, _tone: &Tone) -> Result<(), ToneError> {
        Ok(())
    }

    fn silence(&mut self) {}
}
