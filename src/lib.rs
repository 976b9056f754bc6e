//! breathe - A guided-breathing pacer for the terminal
//!
//! This crate provides a breathing controller that paces inhale, hold,
//! exhale and pause phases, ends timed sessions on a cycle boundary, and
//! drives either a full-screen TUI or a line transcript.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pacer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PacerError;
pub use pacer::{BreathingController, PacerConfig, Preset};
