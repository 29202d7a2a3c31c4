//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup_form(frame, main_area, app);

    // Summary dialog overlays the form
    if let Some(summary) = app.state.summary_text() {
        components::render_summary_dialog(frame, &summary, app.state.reveal_password);
    }

    layout::draw_status_bar(frame, status_area, app);
}
