//! Two-phase submission gate: credentials first, then profile

use super::field::{mask, FieldName};
use super::field_set::FieldSet;
use std::fmt;

/// Which group of fields the form is currently collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingCredentials,
    AwaitingProfile,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AwaitingCredentials => "Credentials",
            Self::AwaitingProfile => "Profile",
        }
    }

    /// 1-based step number for display
    pub fn step_number(&self) -> usize {
        match self {
            Self::AwaitingCredentials => 1,
            Self::AwaitingProfile => 2,
        }
    }
}

const CREDENTIAL_FIELDS: &[FieldName] = &[FieldName::Email, FieldName::Password];
const PROFILE_FIELDS: &[FieldName] = &[FieldName::Name, FieldName::Age];

/// The fields that are editable in `phase`; every other field is disabled
pub fn fields_enabled_for(phase: Phase) -> &'static [FieldName] {
    match phase {
        Phase::AwaitingCredentials => CREDENTIAL_FIELDS,
        Phase::AwaitingProfile => PROFILE_FIELDS,
    }
}

/// The values collected by a successful profile step
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: u32,
}

impl Submission {
    /// Human-readable summary. The password is masked unless `reveal_password` is set.
    pub fn summary(&self, reveal_password: bool) -> String {
        let password = if reveal_password {
            self.password.clone()
        } else {
            mask(&self.password)
        };
        format!(
            "Email: {}\nPassword: {}\nName: {}\nAge: {}",
            self.email, password, self.name, self.age
        )
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("age", &self.age)
            .finish()
    }
}

/// Result of an advance attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// At least one field of the current step failed validation
    Blocked { invalid: Vec<FieldName> },
    /// Credentials accepted; profile fields are now editable
    ProfileUnlocked,
    /// Profile accepted; all four values collected
    Submitted(Submission),
}

/// Drives the credentials → profile gate over a field set
#[derive(Debug, Default)]
pub struct StepController {
    phase: Phase,
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Bring the field set's enabled flags in line with the current phase
    pub fn attach<F: FieldSet + ?Sized>(&self, fields: &mut F) {
        apply_enabled(self.phase, fields);
    }

    /// Touch and validate the current step's fields, then move the gate forward.
    ///
    /// In the profile phase a valid form produces the same submission on every call.
    pub fn advance<F: FieldSet + ?Sized>(&mut self, fields: &mut F) -> Advance {
        let group = fields_enabled_for(self.phase);
        for &field in group {
            fields.set_touched(field, true);
        }

        let invalid: Vec<FieldName> = group
            .iter()
            .copied()
            .filter(|&field| !fields.errors(field).is_empty())
            .collect();
        if !invalid.is_empty() {
            tracing::debug!(phase = ?self.phase, ?invalid, "advance blocked by validation");
            return Advance::Blocked { invalid };
        }

        match self.phase {
            Phase::AwaitingCredentials => {
                self.phase = Phase::AwaitingProfile;
                apply_enabled(self.phase, fields);
                tracing::info!("credentials accepted, profile step unlocked");
                Advance::ProfileUnlocked
            }
            Phase::AwaitingProfile => {
                let Some(age) = fields.value(FieldName::Age).as_integer() else {
                    return Advance::Blocked {
                        invalid: vec![FieldName::Age],
                    };
                };
                let submission = Submission {
                    email: fields.value(FieldName::Email).as_text().to_string(),
                    password: fields.value(FieldName::Password).as_text().to_string(),
                    name: fields.value(FieldName::Name).as_text().to_string(),
                    age,
                };
                tracing::info!(email = %submission.email, name = %submission.name, "profile submitted");
                Advance::Submitted(submission)
            }
        }
    }
}

fn apply_enabled<F: FieldSet + ?Sized>(phase: Phase, fields: &mut F) {
    let enabled = fields_enabled_for(phase);
    for field in FieldName::ALL {
        fields.set_enabled(field, enabled.contains(&field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldValue;
    use crate::state::forms::field_set::{FieldSetModel, MockFieldSet};
    use crate::state::forms::validation::ErrorTag;
    use mockall::predicate::eq;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn fill_credentials(model: &mut FieldSetModel) {
        model.set_value(FieldName::Email, text("x@y.com"));
        model.set_value(FieldName::Password, text("123456"));
    }

    fn fill_profile(model: &mut FieldSetModel) {
        model.set_value(FieldName::Name, text("Ana"));
        model.set_value(FieldName::Age, FieldValue::Integer(Some(45)));
    }

    fn expected_submission() -> Submission {
        Submission {
            email: "x@y.com".to_string(),
            password: "123456".to_string(),
            name: "Ana".to_string(),
            age: 45,
        }
    }

    mod enabled_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_phases_enable_disjoint_groups() {
            let credentials = fields_enabled_for(Phase::AwaitingCredentials);
            let profile = fields_enabled_for(Phase::AwaitingProfile);
            assert_eq!(credentials, &[FieldName::Email, FieldName::Password]);
            assert_eq!(profile, &[FieldName::Name, FieldName::Age]);
            assert!(credentials.iter().all(|f| !profile.contains(f)));
        }

        #[test]
        fn test_attach_applies_phase() {
            let mut model = FieldSetModel::new();
            model.set_enabled(FieldName::Name, true);
            StepController::new().attach(&mut model);
            assert!(!model.is_enabled(FieldName::Name));
            assert!(model.is_enabled(FieldName::Email));
        }
    }

    mod credentials_step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_credentials_unlock_profile() {
            let mut model = FieldSetModel::new();
            let mut controller = StepController::new();
            fill_credentials(&mut model);

            assert_eq!(controller.advance(&mut model), Advance::ProfileUnlocked);
            assert_eq!(controller.phase(), Phase::AwaitingProfile);
            assert!(!model.is_enabled(FieldName::Email));
            assert!(!model.is_enabled(FieldName::Password));
            assert!(model.is_enabled(FieldName::Name));
            assert!(model.is_enabled(FieldName::Age));
            assert_eq!(model.value(FieldName::Email), text("x@y.com"));
        }

        #[test]
        fn test_invalid_credentials_only_touch() {
            let mut model = FieldSetModel::new();
            let mut controller = StepController::new();
            model.set_value(FieldName::Email, text("abc"));

            let outcome = controller.advance(&mut model);

            assert_eq!(
                outcome,
                Advance::Blocked {
                    invalid: vec![FieldName::Email, FieldName::Password]
                }
            );
            assert_eq!(controller.phase(), Phase::AwaitingCredentials);
            assert!(model.is_touched(FieldName::Email));
            assert!(model.is_touched(FieldName::Password));
            assert!(!model.is_touched(FieldName::Name));
            assert!(!model.is_enabled(FieldName::Name));
        }

        #[test]
        fn test_blocked_step_leaves_enabled_flags_alone() {
            let mut fields = MockFieldSet::new();
            fields.expect_set_touched().times(2).return_const(());
            fields
                .expect_errors()
                .with(eq(FieldName::Email))
                .return_const(vec![ErrorTag::InvalidFormat]);
            fields
                .expect_errors()
                .with(eq(FieldName::Password))
                .return_const(Vec::<ErrorTag>::new());
            fields.expect_set_enabled().never();

            let mut controller = StepController::new();
            assert_eq!(
                controller.advance(&mut fields),
                Advance::Blocked {
                    invalid: vec![FieldName::Email]
                }
            );
        }

        #[test]
        fn test_unlock_rederives_every_enabled_flag() {
            let mut fields = MockFieldSet::new();
            fields.expect_set_touched().return_const(());
            fields.expect_errors().return_const(Vec::<ErrorTag>::new());
            for (field, enabled) in [
                (FieldName::Email, false),
                (FieldName::Password, false),
                (FieldName::Name, true),
                (FieldName::Age, true),
            ] {
                fields
                    .expect_set_enabled()
                    .with(eq(field), eq(enabled))
                    .times(1)
                    .return_const(());
            }

            let mut controller = StepController::new();
            assert_eq!(controller.advance(&mut fields), Advance::ProfileUnlocked);
        }
    }

    mod profile_step {
        use super::*;
        use pretty_assertions::assert_eq;

        fn unlocked() -> (FieldSetModel, StepController) {
            let mut model = FieldSetModel::new();
            let mut controller = StepController::new();
            fill_credentials(&mut model);
            controller.advance(&mut model);
            (model, controller)
        }

        #[test]
        fn test_profile_fields_untouched_after_unlock() {
            let (model, _) = unlocked();
            assert!(!model.is_touched(FieldName::Name));
            assert!(!model.is_touched(FieldName::Age));
        }

        #[test]
        fn test_valid_profile_submits_all_values() {
            let (mut model, mut controller) = unlocked();
            fill_profile(&mut model);

            assert_eq!(
                controller.advance(&mut model),
                Advance::Submitted(expected_submission())
            );
            assert_eq!(controller.phase(), Phase::AwaitingProfile);
        }

        #[test]
        fn test_repeated_submit_is_idempotent() {
            let (mut model, mut controller) = unlocked();
            fill_profile(&mut model);

            let first = controller.advance(&mut model);
            let second = controller.advance(&mut model);
            assert_eq!(first, second);
            assert_eq!(second, Advance::Submitted(expected_submission()));
        }

        #[test]
        fn test_invalid_profile_is_blocked() {
            let (mut model, mut controller) = unlocked();
            model.set_value(FieldName::Name, text("Maria123"));
            model.set_value(FieldName::Age, FieldValue::Integer(Some(131)));

            assert_eq!(
                controller.advance(&mut model),
                Advance::Blocked {
                    invalid: vec![FieldName::Name, FieldName::Age]
                }
            );
            assert!(model.is_touched(FieldName::Name));
            assert!(model.is_touched(FieldName::Age));
            assert!(model.is_enabled(FieldName::Name));
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_summary_masks_password_by_default() {
            let summary = expected_submission().summary(false);
            assert!(!summary.contains("123456"));
            assert!(summary.contains("Password: ••••••"));
            assert!(summary.contains("Email: x@y.com"));
            assert!(summary.contains("Name: Ana"));
            assert!(summary.contains("Age: 45"));
        }

        #[test]
        fn test_summary_can_reveal_password() {
            let summary = expected_submission().summary(true);
            assert!(summary.contains("Password: 123456"));
        }

        #[test]
        fn test_debug_redacts_password() {
            let debug_str = format!("{:?}", expected_submission());
            assert!(debug_str.contains("Submission"));
            assert!(!debug_str.contains("123456"));
        }
    }
}
