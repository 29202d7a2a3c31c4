//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::Phase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the current screen
fn get_hints(app: &App) -> &'static str {
    if app.state.has_summary() {
        return " Enter/Esc: close  r: show/hide password";
    }
    match app.state.form.phase() {
        Phase::AwaitingCredentials => " Tab: next field  Enter: next step  Esc: quit",
        Phase::AwaitingProfile => " Tab: next field  Enter: submit  Esc: quit",
    }
}

/// Draw the status bar at the bottom
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let phase = app.state.form.phase();
    let mut spans = vec![Span::styled(
        format!(" {}/2 ", phase.step_number()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if app.state.show_hints {
        spans.push(Span::styled(
            get_hints(app),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let hint_area = Rect {
            x: area.x + area.width - hint_width,
            y: area.y,
            width: hint_width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(quit_hint).style(Style::default().fg(Color::Gray).bg(Color::DarkGray)),
            hint_area,
        );
    }
}
