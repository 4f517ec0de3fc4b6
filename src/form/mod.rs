mod binding;
mod controller;

pub use binding::FormBinding;
pub use controller::{AuthController, LoadingFlag, LoadingGuard, Outcome, SIGNED_IN_MESSAGE};

use crate::auth::RegistrationRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const REQUIRED_FIELD: &str = "This field is required";

/// Which half of the auth form is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormVariant {
    Login,
    #[default]
    Signup,
}

impl FormVariant {
    pub fn toggle(self) -> Self {
        match self {
            FormVariant::Login => FormVariant::Signup,
            FormVariant::Signup => FormVariant::Login,
        }
    }

    /// Fields rendered, in order, for this variant.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormVariant::Login => &[Field::Email, Field::Password],
            FormVariant::Signup => &[Field::Name, Field::Email, Field::Password],
        }
    }

    pub fn shows_name_field(self) -> bool {
        self.fields().contains(&Field::Name)
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormVariant::Login => "Log in",
            FormVariant::Signup => "Sign up",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            FormVariant::Login => "New to Messenger?",
            FormVariant::Signup => "Already have an account?",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            FormVariant::Login => "Create an account",
            FormVariant::Signup => "Log in",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
}

impl SubmissionState {
    pub fn is_loading(self) -> bool {
        self == SubmissionState::Loading
    }
}

impl From<bool> for SubmissionState {
    fn from(loading: bool) -> Self {
        if loading {
            SubmissionState::Loading
        } else {
            SubmissionState::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Name,
    Password,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "name",
            Field::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Name => "Name",
            Field::Password => "Password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "text",
            Field::Password => "password",
        }
    }

    pub fn autocomplete(self, variant: FormVariant) -> &'static str {
        match (self, variant) {
            (Field::Email, _) => "email",
            (Field::Name, _) => "name",
            (Field::Password, FormVariant::Login) => "current-password",
            (Field::Password, FormVariant::Signup) => "new-password",
        }
    }
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub name: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => self.email,
            Field::Name => self.name,
            Field::Password => self.password,
        }
    }

    fn set(&mut self, field: Field, error: &'static str) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::Password => &mut self.password,
        };
        *slot = Some(error);
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password.is_none()
    }
}

/// Credentials collected at submit time. `name` is only present on signup.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPayload {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

impl fmt::Debug for CredentialPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPayload")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CredentialPayload {
    pub fn into_registration(self) -> RegistrationRequest {
        RegistrationRequest {
            email: self.email,
            name: self.name.unwrap_or_default(),
            password: self.password,
        }
    }
}

impl FieldValues {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Name => &self.name,
            Field::Password => &self.password,
        }
    }

    /// Checks the fields rendered for `variant` and builds the payload.
    /// Values of fields that are not rendered are dropped.
    pub fn validate(&self, variant: FormVariant) -> Result<CredentialPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        for &field in variant.fields() {
            if self.value(field).trim().is_empty() {
                errors.set(field, REQUIRED_FIELD);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CredentialPayload {
            email: self.email.trim().to_string(),
            name: variant
                .shows_name_field()
                .then(|| self.name.trim().to_string()),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(email: &str, name: &str, password: &str) -> FieldValues {
        FieldValues {
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    #[test]
    fn toggle_parity() {
        let mut variant = FormVariant::default();
        assert_eq!(variant, FormVariant::Signup);
        for n in 1..=16 {
            variant = variant.toggle();
            let expected = if n % 2 == 0 {
                FormVariant::Signup
            } else {
                FormVariant::Login
            };
            assert_eq!(variant, expected, "after {n} toggles");
        }
    }

    #[test]
    fn name_field_only_on_signup() {
        assert!(FormVariant::Signup.shows_name_field());
        assert!(!FormVariant::Login.shows_name_field());
        assert_eq!(FormVariant::Login.fields(), &[Field::Email, Field::Password]);
    }

    #[test]
    fn signup_requires_name() {
        let errors = values("a@b.com", " ", "x")
            .validate(FormVariant::Signup)
            .unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(REQUIRED_FIELD));
        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn login_ignores_name() {
        let payload = values("a@b.com", "leftover", "wrong")
            .validate(FormVariant::Login)
            .unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.email, "a@b.com");
        assert_eq!(payload.password, "wrong");
    }

    #[test]
    fn empty_form_reports_every_rendered_field() {
        let errors = FieldValues::default()
            .validate(FormVariant::Login)
            .unwrap_err();
        assert_eq!(
            errors,
            FieldErrors {
                email: Some(REQUIRED_FIELD),
                name: None,
                password: Some(REQUIRED_FIELD),
            }
        );
    }

    #[test]
    fn signup_payload_carries_all_three_fields() {
        let registration = values(" a@b.com ", "A", "x")
            .validate(FormVariant::Signup)
            .unwrap()
            .into_registration();
        assert_eq!(
            registration,
            RegistrationRequest {
                email: "a@b.com".into(),
                name: "A".into(),
                password: "x".into(),
            }
        );
    }

    #[test]
    fn password_whitespace_is_preserved() {
        let payload = values("a@b.com", "", " pw ")
            .validate(FormVariant::Login)
            .unwrap();
        assert_eq!(payload.password, " pw ");
    }

    #[test]
    fn submission_state_from_flag() {
        assert_eq!(SubmissionState::from(true), SubmissionState::Loading);
        assert!(!SubmissionState::from(false).is_loading());
    }
}
