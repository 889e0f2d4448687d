//! Credential forms and their validation rules.
//!
//! Validation is expressed with `validator` derives and flattened into
//! [`FieldErrors`], one message per field.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Input fields of the credential forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// Field name as used in form posts and validation reports
    pub fn name(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirm_password",
        }
    }

    /// Resolve a field from its name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "email" => Some(FormField::Email),
            "password" => Some(FormField::Password),
            "confirm_password" => Some(FormField::ConfirmPassword),
            _ => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-level validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    /// Message attached to a field, if any
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Attach a message to a field, replacing any previous one
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the message attached to a field
    pub fn clear(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (name, field_errors) in errors.field_errors() {
            let Some(field) = FormField::from_name(name.as_ref()) else {
                continue;
            };
            // First failing rule wins
            let message = field_errors
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field.name()));
            out.insert(field, message);
        }
        out
    }
}

/// Common behaviour of the sign-in and sign-up forms.
pub trait CredentialForm: Validate + Clone + Default + Send + Sync + 'static {
    /// Fields rendered by this form, in display order
    const FIELDS: &'static [FormField];

    /// Current value of a field (empty for fields the form does not have)
    fn field(&self, field: FormField) -> &str;

    /// Replace the value of a field; fields the form does not have are ignored
    fn set_field(&mut self, field: FormField, value: String);

    /// Run the schema and collect per-field messages.
    fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(&errors),
        }
    }
}

/// Sign-in form values.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignInCredentials {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl SignInCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl CredentialForm for SignInCredentials {
    const FIELDS: &'static [FormField] = &[FormField::Email, FormField::Password];

    fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => "",
        }
    }

    fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => {}
        }
    }
}

/// Sign-up form values.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignUpCredentials {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl SignUpCredentials {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

impl CredentialForm for SignUpCredentials {
    const FIELDS: &'static [FormField] = &[
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }
}

// Passwords never reach logs
impl fmt::Debug for SignInCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for SignUpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}
