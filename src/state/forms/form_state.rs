//! Form state management for the signup form

use super::field::{FieldName, FieldValue, FormField};
use super::field_set::{FieldChange, FieldSet, FieldSetModel};
use super::messages;
use super::step::{Advance, Phase, StepController};
use tokio::sync::watch;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Whether focus may land on the row at `index`
    fn is_focusable(&self, index: usize) -> bool;
    fn next_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_focusable(index) {
                self.set_active_field(index);
                return;
            }
        }
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_focusable(index) {
                self.set_active_field(index);
                return;
            }
        }
    }
}

/// Focus index of the advance button, after the four fields
pub const BUTTON_ROW: usize = 4;

/// Two-step signup form: credentials, then profile
#[derive(Debug)]
pub struct SignupForm {
    fields: FieldSetModel,
    controller: StepController,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        let mut fields = FieldSetModel::new();
        let controller = StepController::new();
        controller.attach(&mut fields);
        Self {
            fields,
            controller,
            active_field_index: FieldName::Email.index(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        self.fields.field(name)
    }

    /// Field under focus (None on the button row)
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTON_ROW
    }

    /// Label of the advance button for the current phase
    pub fn button_label(&self) -> &'static str {
        match self.phase() {
            Phase::AwaitingCredentials => "Next",
            Phase::AwaitingProfile => "Submit",
        }
    }

    /// Message to show under `field`, if any
    pub fn error_message(&self, field: FieldName) -> Option<&'static str> {
        messages::resolve(&self.fields, field)
    }

    pub fn subscribe(&self) -> watch::Receiver<FieldChange> {
        self.fields.subscribe()
    }

    /// Type a character into the focused field. Disabled fields ignore input.
    pub fn push_char(&mut self, c: char) {
        self.edit_active(|value| value.push_char(c));
    }

    /// Delete the last character of the focused field
    pub fn pop_char(&mut self) {
        self.edit_active(|value| value.pop_char());
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut FieldValue) -> bool) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if !self.fields.is_enabled(name) {
            return;
        }
        let mut value = self.fields.value(name);
        if edit(&mut value) {
            self.fields.set_value(name, value);
        }
    }

    /// Run the step gate. Unlocking the profile step moves focus to the name field.
    pub fn advance(&mut self) -> Advance {
        let outcome = self.controller.advance(&mut self.fields);
        if outcome == Advance::ProfileUnlocked {
            self.active_field_index = FieldName::Name.index();
        }
        outcome
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        5 // email, password, name, age, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTON_ROW);
    }
    fn is_focusable(&self, index: usize) -> bool {
        match FieldName::from_index(index) {
            Some(name) => self.fields.is_enabled(name),
            None => index == BUTTON_ROW,
        }
    }
}
