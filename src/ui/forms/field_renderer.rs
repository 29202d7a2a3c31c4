//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let is_active = is_active && field.enabled;

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if !field.enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_style = if field.enabled {
        Style::default()
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else if is_active {
        // Borders take two columns, the cursor one more
        let visible = area.width.saturating_sub(3) as usize;
        visible_tail(&display_value, visible).to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let title = if field.enabled {
        format!(" {} ", field.label())
    } else {
        format!(" {} (locked) ", field.label())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// The last `width` characters of `value`, so the end being typed stays in view
fn visible_tail(value: &str, width: usize) -> &str {
    let skip = value.chars().count().saturating_sub(width);
    value
        .char_indices()
        .nth(skip)
        .map_or("", |(offset, _)| &value[offset..])
}

/// Draw the inline error line under a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Draw dimmed help text lines
pub fn draw_help_text(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let help: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::DarkGray))))
        .collect();
    frame.render_widget(Paragraph::new(help), area);
}
