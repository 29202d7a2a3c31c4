//! Inline error messages for form fields

use super::field::FieldName;
use super::field_set::FieldSet;
use super::validation::ErrorTag;

/// One entry of the message table. `field: None` applies to every field.
struct MessageRule {
    field: Option<FieldName>,
    tag: ErrorTag,
    message: &'static str,
}

impl MessageRule {
    fn matches(&self, field: FieldName, errors: &[ErrorTag]) -> bool {
        self.field.is_none_or(|f| f == field) && errors.contains(&self.tag)
    }
}

/// Evaluated top to bottom; the first matching rule wins
const RULES: &[MessageRule] = &[
    MessageRule {
        field: None,
        tag: ErrorTag::Required,
        message: "Required field",
    },
    MessageRule {
        field: Some(FieldName::Email),
        tag: ErrorTag::InvalidFormat,
        message: "Invalid email",
    },
    MessageRule {
        field: Some(FieldName::Password),
        tag: ErrorTag::TooShort,
        message: "Password must be at least 6 characters",
    },
    MessageRule {
        field: Some(FieldName::Name),
        tag: ErrorTag::PatternMismatch,
        message: "Name must contain only letters",
    },
    MessageRule {
        field: Some(FieldName::Age),
        tag: ErrorTag::BelowMin,
        message: "Age must be greater than 0",
    },
    MessageRule {
        field: Some(FieldName::Age),
        tag: ErrorTag::AboveMax,
        message: "Age must be less than 130",
    },
];

/// The single message to show for a field, if any.
///
/// Nothing is shown until the field has been touched.
pub fn error_message(field: FieldName, touched: bool, errors: &[ErrorTag]) -> Option<&'static str> {
    if !touched || errors.is_empty() {
        return None;
    }
    RULES
        .iter()
        .find(|rule| rule.matches(field, errors))
        .map(|rule| rule.message)
}

/// Resolve the message for `field` from the current state of a field set
pub fn resolve<F: FieldSet + ?Sized>(fields: &F, field: FieldName) -> Option<&'static str> {
    error_message(field, fields.is_touched(field), &fields.errors(field))
}
