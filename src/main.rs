use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use breathe::cli::args::{Cli, Commands};
use breathe::cli::commands;
use breathe::config::{Config, Paths};
use breathe::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = Config::load(cli.config.as_deref()).context("loading configuration")?;
    settings.general.color.apply();
    let format = cli.output.unwrap_or(settings.general.default_output);

    // The full-screen pacer owns the terminal, so its logs go to a file
    let owns_screen = matches!(&cli.command, Commands::Run(args) if !args.headless);
    let _guard = if owns_screen {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        logging::init(cli.verbose, LogTarget::File(&paths.log_file))?
    } else {
        logging::init(cli.verbose, LogTarget::Stderr)?
    };

    let output = match cli.command {
        Commands::Run(args) => commands::run(&args, &settings, format)?,
        Commands::Presets => commands::presets(format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
