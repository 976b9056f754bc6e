use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::audio::AudioBackend;

#[derive(Parser)]
#[command(name = "breathe")]
#[command(about = "A guided-breathing pacer for the terminal")]
#[command(long_about = "breathe - A guided-breathing pacer

Cycles you through inhale, hold, exhale and pause phases with a live
progress display, optional phase tones, and an optional session limit
that always finishes the last full breath before stopping.

QUICK START:
  breathe run                      Box breathing until you press q
  breathe run --preset 4-7-8       Use a named pattern
  breathe run --session 5 --tones  Five minutes with phase tones
  breathe presets                  List the built-in patterns

For more information on a specific command, run:
  breathe <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Configuration file (defaults to ~/.breathe/config.yaml)
    #[arg(long, global = true, env = "BREATHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a breathing exercise
    ///
    /// Opens a full-screen pacer by default. Timings come from the chosen
    /// preset (or the configured default) and can be overridden per phase.
    ///
    /// # Examples
    ///
    ///   breathe run                           Default preset
    ///   breathe run --preset perfect          5.5s in, 5.5s out
    ///   breathe run --inhale 4 --exhale 8     Override timings
    ///   breathe run --hold 2 --no-pause       Add a hold, drop the pause
    ///   breathe run --session 10 --tones      Ten-minute session with tones
    ///   breathe run --headless --simulate --session 1
    #[command(alias = "r")]
    Run(RunArgs),

    /// List the built-in breathing patterns
    ///
    /// Shows each preset's timings and its average cycles per minute.
    #[command(alias = "ls")]
    Presets,

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   breathe completions bash > /etc/bash_completion.d/breathe
    ///   breathe completions zsh > ~/.zfunc/_breathe
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `breathe run`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Named pattern to start from
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Inhale length in seconds
    #[arg(long, value_parser = parse_seconds)]
    pub inhale: Option<f64>,

    /// Hold length in seconds (enables the hold phase)
    #[arg(long, value_parser = parse_seconds, conflicts_with = "no_hold")]
    pub hold: Option<f64>,

    /// Exhale length in seconds
    #[arg(long, value_parser = parse_seconds)]
    pub exhale: Option<f64>,

    /// Pause length in seconds (enables the pause phase)
    #[arg(long, value_parser = parse_seconds, conflicts_with = "no_pause")]
    pub pause: Option<f64>,

    /// Skip the hold phase
    #[arg(long)]
    pub no_hold: bool,

    /// Skip the pause phase
    #[arg(long)]
    pub no_pause: bool,

    /// Session length in minutes
    #[arg(short, long, value_parser = parse_minutes)]
    pub session: Option<f64>,

    /// Play a tone at the start of every phase
    #[arg(long, conflicts_with = "no_tones")]
    pub tones: bool,

    /// Never play phase tones
    #[arg(long)]
    pub no_tones: bool,

    /// Tone backend
    #[arg(long, value_enum)]
    pub audio: Option<AudioBackend>,

    /// Print phase changes as lines instead of opening the full-screen pacer
    #[arg(long)]
    pub headless: bool,

    /// Run against a simulated clock and print the whole session at once
    #[arg(long, requires_all = ["headless", "session"])]
    pub simulate: bool,
}

fn parse_non_negative(s: &str, unit: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number of {unit}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{unit} must be zero or more, got '{s}'"));
    }
    Ok(value)
}

fn parse_seconds(s: &str) -> Result<f64, String> {
    parse_non_negative(s, "seconds")
}

fn parse_minutes(s: &str) -> Result<f64, String> {
    parse_non_negative(s, "minutes")
}
