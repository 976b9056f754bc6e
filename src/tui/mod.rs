//! Terminal User Interface (TUI) for breathe.
//!
//! Full-screen pacer with a live progress gauge and session countdown.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::audio::TonePlayer;
use crate::error::PacerError;
use crate::pacer::{PacerConfig, PacerTiming, Preset};

/// How long to wait for input between redraws.
const FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Run the TUI application.
///
/// Returns a summary line once the user quits.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(
    config: PacerConfig,
    preset: Option<&'static Preset>,
    timing: PacerTiming,
    player: Box<dyn TonePlayer>,
) -> Result<String, PacerError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PacerError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PacerError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PacerError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(config, preset, timing, player);
    let result = run_app(&mut terminal, &mut app);
    app.stop();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result?;
    Ok(match app.sessions_completed {
        0 => String::new(),
        1 => "Completed 1 session".to_string(),
        n => format!("Completed {n} sessions"),
    })
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PacerError> {
    loop {
        app.tick();

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PacerError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app, FRAME_INTERVAL)? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle(),
                event::Action::Preset(index) => app.select_preset(index),
                event::Action::ToggleHold => app.toggle_hold(),
                event::Action::TogglePause => app.toggle_pause(),
                event::Action::ToggleTones => app.toggle_tones(),
            }
        }
    }

    Ok(())
}
