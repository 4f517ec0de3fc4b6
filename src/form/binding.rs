use super::{CredentialPayload, Field, FieldErrors, FieldValues, FormVariant};
use leptos::*;

/// Reactive field values and validation errors for the auth form.
#[derive(Clone, Copy)]
pub struct FormBinding {
    email: RwSignal<String>,
    name: RwSignal<String>,
    password: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
}

impl FormBinding {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            name: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }

    pub fn value(&self, field: Field) -> RwSignal<String> {
        match field {
            Field::Email => self.email,
            Field::Name => self.name,
            Field::Password => self.password,
        }
    }

    pub fn error(&self, field: Field) -> Signal<Option<&'static str>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errors| errors.get(field)))
    }

    pub fn clear_errors(&self) {
        self.errors.set(FieldErrors::default());
    }

    fn snapshot(&self) -> FieldValues {
        FieldValues {
            email: self.email.get_untracked(),
            name: self.name.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    /// Validates the current values, publishing any field errors.
    /// Returns `None` when the form must not be submitted.
    pub fn collect(&self, variant: FormVariant) -> Option<CredentialPayload> {
        match self.snapshot().validate(variant) {
            Ok(payload) => {
                self.clear_errors();
                Some(payload)
            }
            Err(errors) => {
                tracing::debug!("Form has invalid fields: {errors:?}");
                self.errors.set(errors);
                None
            }
        }
    }
}

impl Default for FormBinding {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::REQUIRED_FIELD;

    #[test]
    fn collect_publishes_errors_then_clears_them() {
        let runtime = create_runtime();

        let binding = FormBinding::new();
        binding.value(Field::Email).set("a@b.com".into());
        assert!(binding.collect(FormVariant::Login).is_none());
        assert_eq!(binding.error(Field::Password).get(), Some(REQUIRED_FIELD));
        assert_eq!(binding.error(Field::Email).get(), None);

        binding.value(Field::Password).set("x".into());
        let payload = binding.collect(FormVariant::Login).unwrap();
        assert_eq!(payload.email, "a@b.com");
        assert_eq!(binding.error(Field::Password).get(), None);

        runtime.dispose();
    }
}
