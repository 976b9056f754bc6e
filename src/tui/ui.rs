//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::output::format_config_summary;
use crate::pacer::PhaseKind;
use crate::tui::app::App;
use crate::tui::event::HELP;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, phase, progress, timers, settings, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Phase
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Timers
            Constraint::Min(0),    // Settings
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_phase(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_timers(frame, app, chunks[3]);
    render_settings(frame, app, chunks[4]);
    render_status_bar(frame, app, chunks[5]);
}

const fn phase_color(phase: Option<PhaseKind>) -> Color {
    match phase {
        Some(PhaseKind::Inhale) => Color::Cyan,
        Some(PhaseKind::Hold) => Color::Yellow,
        Some(PhaseKind::Exhale) => Color::Green,
        Some(PhaseKind::Pause) => Color::Magenta,
        None => Color::DarkGray,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let pattern = app.preset.map_or("Custom", |p| p.name);
    let state = if app.is_running() { "running" } else { "idle" };
    let title = format!(" breathe - {pattern} ({state}) ");

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the phase label.
fn render_phase(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let view = app.view();
    let label = view.phase.map_or("Ready", |p| p.label());

    let phase = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(phase_color(view.phase))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" Phase "));

    frame.render_widget(phase, area);
}

/// Render the phase progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let view = app.view();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(phase_color(view.phase)))
        .ratio(view.progress.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

/// Render elapsed phase time and the session countdown.
fn render_timers(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let view = app.view();

    let mut spans = vec![
        Span::styled("Phase ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}s", view.phase_elapsed),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(ref remaining) = view.session_remaining {
        spans.push(Span::styled(
            "   Session ",
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            remaining.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let timers =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(timers, area);
}

/// Render the configuration for the next (or current) run.
fn render_settings(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from(format_config_summary(&app.config)),
        Line::from(Span::styled(
            app.config.format_cycles_per_minute(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("Sessions completed: {}", app.sessions_completed),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let settings = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Settings "));

    frame.render_widget(settings, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::audio::SilentTonePlayer;
    use crate::pacer::{PacerTiming, Preset};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_idle_screen() {
        let app = App::new(
            Preset::BOX.config(),
            Some(&Preset::BOX),
            PacerTiming::default(),
            Box::new(SilentTonePlayer),
        );
        let text = screen(&app);

        assert!(text.contains("Box Breathing (idle)"));
        assert!(text.contains("Ready"));
        assert!(text.contains("Average Cycles per Minute: 3.75"));
    }

    #[test]
    fn test_running_screen() {
        let mut config = Preset::BOX.config();
        config.session_minutes = Some(2.0);
        let mut app = App::new(
            config,
            None,
            PacerTiming::default(),
            Box::new(SilentTonePlayer),
        );
        let t0 = Instant::now();
        app.toggle_at(t0);
        app.tick_at(t0 + Duration::from_millis(5_000));

        let text = screen(&app);
        assert!(text.contains("(running)"));
        assert!(text.contains("Hold"));
        assert!(text.contains("Session 1:55"));
    }
}
