//! Form field value objects

use super::validation::{self, ErrorTag};
use std::fmt;

/// Maximum number of digits accepted by integer fields
const MAX_INTEGER_DIGITS: usize = 3;

/// The fields of the signup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Email,
    Password,
    Name,
    Age,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Email,
        FieldName::Password,
        FieldName::Name,
        FieldName::Age,
    ];

    /// Stable identifier used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Name => "name",
            Self::Age => "age",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Name => "Name",
            Self::Age => "Age",
        }
    }

    /// Position of the field in the form
    pub fn index(&self) -> usize {
        match self {
            Self::Email => 0,
            Self::Password => 1,
            Self::Name => 2,
            Self::Age => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the value should be masked when displayed
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(Option<u32>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// True when nothing has been entered
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Integer(n) => n.is_none(),
        }
    }

    /// Get the text value (returns empty string for integer fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Integer(_) => "",
        }
    }

    /// Get the integer value (returns None for text fields)
    pub fn as_integer(&self) -> Option<u32> {
        match self {
            FieldValue::Integer(n) => *n,
            FieldValue::Text(_) => None,
        }
    }

    /// Push a character to the value.
    ///
    /// Integer values only accept ASCII digits, up to three of them.
    /// Returns whether the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match self {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Integer(n) => {
                let Some(d) = c.to_digit(10) else {
                    return false;
                };
                let digits = n.map(|v| v.to_string().len()).unwrap_or(0);
                if digits >= MAX_INTEGER_DIGITS {
                    return false;
                }
                *n = Some(n.unwrap_or(0) * 10 + d);
                true
            }
        }
    }

    /// Remove the last character from the value.
    /// Returns whether the value changed.
    pub fn pop_char(&mut self) -> bool {
        match self {
            FieldValue::Text(s) => s.pop().is_some(),
            FieldValue::Integer(n) => match *n {
                Some(v) if v >= 10 => {
                    *n = Some(v / 10);
                    true
                }
                Some(_) => {
                    *n = None;
                    true
                }
                None => false,
            },
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

/// A single form field with its value and interaction flags
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
    pub enabled: bool,
    pub touched: bool,
}

impl FormField {
    /// Create an empty text field
    pub fn text(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Text(String::new()),
            enabled: true,
            touched: false,
        }
    }

    /// Create an empty integer field
    pub fn integer(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Integer(None),
            enabled: true,
            touched: false,
        }
    }

    /// Builder-style helper to start the field disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Active failure tags. Disabled fields are excluded from validation.
    pub fn errors(&self) -> Vec<ErrorTag> {
        if !self.enabled {
            return Vec::new();
        }
        validation::validate(self.name, &self.value)
    }

    /// Display value, masked for secret fields
    pub fn display_value(&self) -> String {
        let value = self.value.display_value();
        if self.name.is_secret() {
            mask(&value)
        } else {
            value
        }
    }
}

/// Replace every character with a bullet
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}
