//! The breathing pacer.
//!
//! Phases, the clock that times them, the session timer, and the controller
//! that ties them together. Nothing in here touches a terminal or a real
//! clock.

mod clock;
mod controller;
mod display;
mod pattern;
mod phase;
mod session;

pub use clock::{PhaseClock, Ticker};
pub use controller::{BreathingController, ControllerState, PacerTiming, RunState, Toggle};
pub use display::{
    format_session_time, format_time, DisplaySink, DisplayUpdate, PacerView,
};
pub use pattern::{PacerConfig, Preset};
pub use phase::{next_phase, PhaseDurations, PhaseKind};
pub use session::{SessionTimer, FINISHING_LABEL};
