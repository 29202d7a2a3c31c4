//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{Advance, AppState, FieldChange, Form};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Value-change notifications from the form
    field_changes: watch::Receiver<FieldChange>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let state = AppState::new(config.reveal_password(), config.show_hints());
        let field_changes = state.form.subscribe();
        Self {
            state,
            quit: false,
            field_changes,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Apply pending field value changes. A stale status message is cleared
    /// as soon as the user edits a field.
    pub fn sync_field_changes(&mut self) {
        if !self.field_changes.has_changed().unwrap_or(false) {
            return;
        }
        let change = *self.field_changes.borrow_and_update();
        tracing::trace!(field = ?change.field, revision = change.revision, "field changed");
        self.state.status_message = None;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Summary dialog is modal
        if self.state.has_summary() {
            self.handle_summary_key(key);
            return;
        }
        self.handle_form_key(key);
    }

    /// Handle keys while the summary dialog is open
    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.dismiss_summary(),
            KeyCode::Char('r') => self.state.toggle_reveal_password(),
            _ => {}
        }
    }

    /// Handle keys in the signup form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => self.advance(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.push_char(c);
            }
            _ => {}
        }
    }

    /// Run the step gate and reflect the outcome in the UI
    fn advance(&mut self) {
        match self.state.form.advance() {
            Advance::Blocked { invalid } => {
                self.state.status_message = Some(match invalid.len() {
                    1 => "1 field needs attention".to_string(),
                    n => format!("{n} fields need attention"),
                });
            }
            Advance::ProfileUnlocked => {
                self.state.status_message = Some("Credentials accepted".to_string());
            }
            Advance::Submitted(submission) => {
                self.state.status_message = None;
                self.state.show_summary(submission);
            }
        }
    }
}
