//! Form domain layer
//!
//! - `field`: field names and values
//! - `validation`: per-field rules and failure tags
//! - `field_set`: the field-set model and its trait
//! - `step`: the credentials → profile gate
//! - `messages`: inline error messages
//! - `form_state`: the signup form bound to keyboard focus

mod field;
mod field_set;
mod form_state;
mod messages;
mod step;
mod validation;

pub use field::{FieldName, FormField};
pub use field_set::FieldChange;
pub use form_state::{Form, SignupForm};
pub use step::{Advance, Phase, Submission};
