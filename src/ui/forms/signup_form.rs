//! Signup form rendering

use super::field_renderer::{draw_field, draw_field_error, draw_help_text};
use crate::app::App;
use crate::state::{FieldName, Phase};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the signup form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the four fields, each followed by its error line
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let phase = form.phase();

    let block = Block::default()
        .title(format!(
            " Sign up · Step {} of 2: {} ",
            phase.step_number(),
            phase.label()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form.is_buttons_row_active() {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(1),
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Length(3), // Name
            Constraint::Length(1),
            Constraint::Length(3), // Age
            Constraint::Length(1),
            Constraint::Length(2), // Help text
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    for name in FieldName::ALL {
        let row = name.index() * 2;
        draw_field(
            frame,
            chunks[row],
            form.field(name),
            form.active_field_name() == Some(name),
        );
        draw_field_error(frame, chunks[row + 1], form.error_message(name));
    }

    let help: &[&str] = match phase {
        Phase::AwaitingCredentials => &[
            "Enter your email and a password of at least 6 characters.",
            "Name and age unlock once the credentials are valid.",
        ],
        Phase::AwaitingProfile => &[
            "Enter your name (letters only) and age (1-130).",
            "Email and password are locked.",
        ],
    };
    draw_help_text(frame, chunks[8], help);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Next / Submit
            Constraint::Min(0),
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        form.button_label(),
        is_focused,
        Color::Green,
    );
}
