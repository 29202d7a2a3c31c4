//! Synchronous per-field validation rules

use super::field::{FieldName, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 130;

const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

static LETTERS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is a valid regex")
});

/// Marker for the validation rule a field currently violates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorTag {
    Required,
    InvalidFormat,
    TooShort,
    PatternMismatch,
    BelowMin,
    AboveMax,
}

/// Built-in validation rules.
///
/// Every rule except `Required` passes on an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    Email,
    MinLength(usize),
    LettersAndSpaces,
    Min(u32),
    Max(u32),
}

impl Validator {
    /// Returns the failure tag when `value` violates this rule
    pub fn check(&self, value: &FieldValue) -> Option<ErrorTag> {
        if value.is_empty() {
            return match self {
                Validator::Required => Some(ErrorTag::Required),
                _ => None,
            };
        }

        let failed = match (self, value) {
            (Validator::Required, _) => false,
            (Validator::Email, FieldValue::Text(s)) => !is_email(s),
            (Validator::MinLength(min), FieldValue::Text(s)) => s.chars().count() < *min,
            (Validator::LettersAndSpaces, FieldValue::Text(s)) => !LETTERS_PATTERN.is_match(s),
            (Validator::Min(min), FieldValue::Integer(Some(n))) => n < min,
            (Validator::Max(max), FieldValue::Integer(Some(n))) => n > max,
            _ => false,
        };

        failed.then(|| self.tag())
    }

    fn tag(&self) -> ErrorTag {
        match self {
            Validator::Required => ErrorTag::Required,
            Validator::Email => ErrorTag::InvalidFormat,
            Validator::MinLength(_) => ErrorTag::TooShort,
            Validator::LettersAndSpaces => ErrorTag::PatternMismatch,
            Validator::Min(_) => ErrorTag::BelowMin,
            Validator::Max(_) => ErrorTag::AboveMax,
        }
    }
}

const EMAIL_RULES: &[Validator] = &[Validator::Required, Validator::Email];
const PASSWORD_RULES: &[Validator] = &[
    Validator::Required,
    Validator::MinLength(PASSWORD_MIN_LENGTH),
];
const NAME_RULES: &[Validator] = &[Validator::Required, Validator::LettersAndSpaces];
const AGE_RULES: &[Validator] = &[
    Validator::Required,
    Validator::Min(AGE_MIN),
    Validator::Max(AGE_MAX),
];

/// The rules attached to a field
pub fn validators_for(field: FieldName) -> &'static [Validator] {
    match field {
        FieldName::Email => EMAIL_RULES,
        FieldName::Password => PASSWORD_RULES,
        FieldName::Name => NAME_RULES,
        FieldName::Age => AGE_RULES,
    }
}

/// Run every rule of `field` against `value`, in rule order
pub fn validate(field: FieldName, value: &FieldValue) -> Vec<ErrorTag> {
    validators_for(field)
        .iter()
        .filter_map(|v| v.check(value))
        .collect()
}

fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LENGTH => {
            EMAIL_PATTERN.is_match(value)
        }
        _ => false,
    }
}
