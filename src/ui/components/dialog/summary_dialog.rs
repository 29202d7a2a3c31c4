//! Submission summary dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the collected values centered on the screen
pub fn render_summary_dialog(frame: &mut Frame, summary: &str, password_revealed: bool) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" close  "),
        Span::styled("r", key_style),
        Span::raw(if password_revealed {
            " hide password"
        } else {
            " show password"
        }),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: summary,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
