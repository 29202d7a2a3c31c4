//! Application state definitions

use super::forms::{SignupForm, Submission};

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: SignupForm,

    // Summary dialog, shown after a successful submit
    pub summary: Option<Submission>,
    pub reveal_password: bool,

    // UI state
    pub status_message: Option<String>,
    pub show_hints: bool,
}

impl AppState {
    pub fn new(reveal_password: bool, show_hints: bool) -> Self {
        Self {
            reveal_password,
            show_hints,
            ..Default::default()
        }
    }

    /// Check if the summary dialog is open
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }

    pub fn show_summary(&mut self, submission: Submission) {
        self.summary = Some(submission);
    }

    pub fn dismiss_summary(&mut self) {
        self.summary = None;
    }

    pub fn toggle_reveal_password(&mut self) {
        self.reveal_password = !self.reveal_password;
    }

    /// Summary text for the open dialog
    pub fn summary_text(&self) -> Option<String> {
        self.summary
            .as_ref()
            .map(|s| s.summary(self.reveal_password))
    }
}
