//! Command implementations for breathe.
//!
//! Every command returns the text to print on stdout.

mod completions;
mod presets;
mod run;

pub use completions::completions;
pub use presets::presets;
pub use run::{completion_line, resolve_run_config, run, simulate, SimulationReport};
