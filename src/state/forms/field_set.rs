//! Field-set model: named fields with value, enabled, touched and validation state

use super::field::{FieldName, FieldValue, FormField};
use super::validation::ErrorTag;
use tokio::sync::watch;

/// Notification published whenever a field value changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldChange {
    /// Field that changed last (None before the first change)
    pub field: Option<FieldName>,
    /// Monotonic change counter
    pub revision: u64,
}

/// Operations the step controller and message resolver need from a form model,
/// enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait FieldSet {
    /// Current value of a field
    fn value(&self, field: FieldName) -> FieldValue;

    /// Replace the value of a field
    fn set_value(&mut self, field: FieldName, value: FieldValue);

    fn is_enabled(&self, field: FieldName) -> bool;

    fn set_enabled(&mut self, field: FieldName, enabled: bool);

    /// Whether the user has interacted with the field
    fn is_touched(&self, field: FieldName) -> bool;

    fn set_touched(&mut self, field: FieldName, touched: bool);

    /// Active failure tags, in rule order. Empty for disabled fields.
    fn errors(&self, field: FieldName) -> Vec<ErrorTag>;

    /// Subscribe to value changes
    fn subscribe(&self) -> watch::Receiver<FieldChange>;
}

/// In-memory field set backing the signup form
#[derive(Debug)]
pub struct FieldSetModel {
    fields: [FormField; 4],
    changes: watch::Sender<FieldChange>,
}

impl FieldSetModel {
    /// Email and password start enabled; name and age start disabled and empty
    pub fn new() -> Self {
        let (changes, _) = watch::channel(FieldChange::default());
        Self {
            fields: [
                FormField::text(FieldName::Email),
                FormField::text(FieldName::Password),
                FormField::text(FieldName::Name).disabled(),
                FormField::integer(FieldName::Age).disabled(),
            ],
            changes,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[name.index()]
    }
}

impl Default for FieldSetModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet for FieldSetModel {
    fn value(&self, field: FieldName) -> FieldValue {
        self.field(field).value.clone()
    }

    fn set_value(&mut self, field: FieldName, value: FieldValue) {
        let slot = &mut self.field_mut(field).value;
        if *slot == value {
            return;
        }
        *slot = value;
        self.changes.send_modify(|change| {
            change.field = Some(field);
            change.revision += 1;
        });
    }

    fn is_enabled(&self, field: FieldName) -> bool {
        self.field(field).enabled
    }

    fn set_enabled(&mut self, field: FieldName, enabled: bool) {
        self.field_mut(field).enabled = enabled;
    }

    fn is_touched(&self, field: FieldName) -> bool {
        self.field(field).touched
    }

    fn set_touched(&mut self, field: FieldName, touched: bool) {
        self.field_mut(field).touched = touched;
    }

    fn errors(&self, field: FieldName) -> Vec<ErrorTag> {
        self.field(field).errors()
    }

    fn subscribe(&self) -> watch::Receiver<FieldChange> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_enabled_flags() {
        let model = FieldSetModel::new();
        assert!(model.is_enabled(FieldName::Email));
        assert!(model.is_enabled(FieldName::Password));
        assert!(!model.is_enabled(FieldName::Name));
        assert!(!model.is_enabled(FieldName::Age));
    }

    #[test]
    fn test_initial_values_are_empty_and_untouched() {
        let model = FieldSetModel::new();
        for field in FieldName::ALL {
            assert!(model.value(field).is_empty(), "{field}");
            assert!(!model.is_touched(field), "{field}");
        }
    }

    #[test]
    fn test_disabled_fields_report_no_errors() {
        let model = FieldSetModel::new();
        assert!(model.errors(FieldName::Name).is_empty());
        assert_eq!(model.errors(FieldName::Email), vec![ErrorTag::Required]);
    }

    #[test]
    fn test_set_value_notifies_subscribers() {
        let mut model = FieldSetModel::new();
        let mut rx = model.subscribe();
        assert!(!rx.has_changed().unwrap());

        model.set_value(FieldName::Email, FieldValue::Text("a@b.com".to_string()));

        assert!(rx.has_changed().unwrap());
        let change = *rx.borrow_and_update();
        assert_eq!(change.field, Some(FieldName::Email));
        assert_eq!(change.revision, 1);
    }

    #[test]
    fn test_setting_same_value_does_not_notify() {
        let mut model = FieldSetModel::new();
        let rx = model.subscribe();
        model.set_value(FieldName::Email, FieldValue::Text(String::new()));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_flags_round_trip() {
        let mut model = FieldSetModel::new();
        model.set_enabled(FieldName::Age, true);
        model.set_touched(FieldName::Age, true);
        assert!(model.is_enabled(FieldName::Age));
        assert!(model.is_touched(FieldName::Age));
        assert_eq!(model.errors(FieldName::Age), vec![ErrorTag::Required]);
    }
}
