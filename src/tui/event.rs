//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PacerError;
use crate::tui::app::App;

/// Help line shown on `?`.
pub const HELP: &str =
    "Space:start/stop | 1-5:preset | h:hold | p:pause | t:tones | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or stop the pacer.
    Toggle,
    /// Pick a preset by menu index.
    Preset(usize),
    /// Switch the hold phase.
    ToggleHold,
    /// Switch the pause phase.
    TogglePause,
    /// Switch phase tones.
    ToggleTones,
}

/// Handle terminal events, waiting at most `timeout`.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, PacerError> {
    if event::poll(timeout).map_err(|e| PacerError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| PacerError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(map_key(app, key));
        }
    }

    Ok(None)
}

/// Translate a key press into an action.
pub fn map_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
            Some(Action::Preset(index))
        }
        KeyCode::Char('h') => Some(Action::ToggleHold),
        KeyCode::Char('p') => Some(Action::TogglePause),
        KeyCode::Char('t') => Some(Action::ToggleTones),
        KeyCode::Char('?') => {
            app.status = Some(HELP.to_string());
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentTonePlayer;
    use crate::pacer::{PacerTiming, Preset};

    fn app() -> App {
        App::new(
            Preset::BOX.config(),
            None,
            PacerTiming::default(),
            Box::new(SilentTonePlayer),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        let mut app = app();
        assert_eq!(map_key(&mut app, press(KeyCode::Char(' '))), Some(Action::Toggle));
        assert_eq!(map_key(&mut app, press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(&mut app, press(KeyCode::Char('1'))), Some(Action::Preset(0)));
        assert_eq!(map_key(&mut app, press(KeyCode::Char('5'))), Some(Action::Preset(4)));
        assert_eq!(map_key(&mut app, press(KeyCode::Char('6'))), None);
        assert_eq!(map_key(&mut app, press(KeyCode::Char('t'))), Some(Action::ToggleTones));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&mut app, key), Some(Action::Quit));
    }

    #[test]
    fn test_help_sets_status() {
        let mut app = app();
        assert_eq!(map_key(&mut app, press(KeyCode::Char('?'))), None);
        assert_eq!(app.status.as_deref(), Some(HELP));
    }
}
