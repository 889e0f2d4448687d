//! askama page templates.

use askama::Template;
use axum::response::Html;

use common::{AppError, AppResult};
use domain::{CredentialForm, FormField, LOGIN_PATH, SIGNUP_PATH, SIGN_OUT_PATH};
use pages::{home::SIGN_IN_TARGET, FormSnapshot};

/// Seconds between reloads of the waiting page
const LOADING_REFRESH_SECONDS: u32 = 1;

const MASKED_PLACEHOLDER: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|err| AppError::template(err.to_string()))
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingPage {
    pub refresh_seconds: u32,
}

impl Default for LoadingPage {
    fn default() -> Self {
        Self {
            refresh_seconds: LOADING_REFRESH_SECONDS,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    /// `Some` when signed in
    pub email: Option<String>,
    pub sign_in_path: &'static str,
    pub sign_out_path: &'static str,
}

impl HomePage {
    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            sign_in_path: SIGN_IN_TARGET,
            sign_out_path: SIGN_OUT_PATH,
        }
    }

    pub fn welcome() -> Self {
        Self {
            email: None,
            sign_in_path: SIGN_IN_TARGET,
            sign_out_path: SIGN_OUT_PATH,
        }
    }
}

/// One input of a credential form.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub autocomplete: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
}

/// A credential form ready for rendering.
pub struct FormView {
    pub action: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub fields: Vec<FieldView>,
    pub form_error: Option<String>,
    pub can_submit: bool,
}

impl FormView {
    fn build<F: CredentialForm>(
        snapshot: &FormSnapshot<F>,
        action: &'static str,
        new_password: bool,
    ) -> Self {
        let fields = F::FIELDS
            .iter()
            .map(|&field| {
                let (label, input_type, autocomplete, placeholder) = match field {
                    FormField::Email => ("Email", "email", "email", "you@example.com"),
                    FormField::Password if new_password => {
                        ("Password", "password", "new-password", MASKED_PLACEHOLDER)
                    }
                    FormField::Password => {
                        ("Password", "password", "current-password", MASKED_PLACEHOLDER)
                    }
                    FormField::ConfirmPassword => {
                        ("Confirm password", "password", "new-password", MASKED_PLACEHOLDER)
                    }
                };
                FieldView {
                    name: field.name(),
                    label,
                    input_type,
                    autocomplete,
                    placeholder,
                    // Passwords are never echoed back into the page
                    value: match field {
                        FormField::Email => snapshot.values.field(field).to_string(),
                        _ => String::new(),
                    },
                    error: snapshot.field_error(field).map(str::to_string),
                }
            })
            .collect();

        let (submit_label, busy_label) = if new_password {
            ("Sign up", "Creating account...")
        } else {
            ("Sign in", "Signing in...")
        };

        Self {
            action,
            submit_label,
            busy_label,
            fields,
            form_error: snapshot.form_error.clone(),
            can_submit: snapshot.can_submit(),
        }
    }

    pub fn sign_in<F: CredentialForm>(snapshot: &FormSnapshot<F>) -> Self {
        Self::build(snapshot, LOGIN_PATH, false)
    }

    pub fn sign_up<F: CredentialForm>(snapshot: &FormSnapshot<F>) -> Self {
        Self::build(snapshot, SIGNUP_PATH, true)
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub form: FormView,
    pub signup_path: &'static str,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupPage {
    pub form: FormView,
    pub login_path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{FieldErrors, SignInCredentials, SignUpCredentials};

    #[test]
    fn test_login_page_renders_errors_and_hides_password() {
        let mut field_errors = FieldErrors::default();
        field_errors.insert(FormField::Email, "Please enter a valid email address");
        let snapshot = FormSnapshot {
            values: SignInCredentials::new("bad<script>", "hunter22"),
            field_errors,
            form_error: Some("Incorrect password. Please try again".to_string()),
            submitted: true,
            submitting: false,
        };

        let html = render(&LoginPage {
            form: FormView::sign_in(&snapshot),
            signup_path: SIGNUP_PATH,
        })
        .unwrap()
        .0;

        assert!(html.contains("Sign in to your account"));
        assert!(html.contains("Enter your email and password below to sign in"));
        assert!(html.contains("continue managing your finances"));
        assert!(html.contains("Please enter a valid email address"));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Incorrect password. Please try again"));
        assert!(html.contains("bad&lt;script&gt;"));
        assert!(!html.contains("hunter22"));
        assert!(html.contains("Don't have an account?"));
    }

    #[test]
    fn test_signup_form_has_three_fields() {
        let snapshot = FormSnapshot {
            values: SignUpCredentials::default(),
            field_errors: FieldErrors::default(),
            form_error: None,
            submitted: false,
            submitting: false,
        };
        let form = FormView::sign_up(&snapshot);
        let names: Vec<_> = form.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["email", "password", "confirm_password"]);
        assert!(form.can_submit);
        assert_eq!(form.action, "/signup");

        let html = render(&SignupPage {
            form,
            login_path: LOGIN_PATH,
        })
        .unwrap()
        .0;
        assert!(html.contains("<h2>Sign up</h2>"));
        assert!(html.contains("start tracking your expenses"));
        assert!(html.contains("Enter your email and a strong password to create your account."));
    }

    #[test]
    fn test_home_views() {
        let html = render(&HomePage::signed_in("a@b.com")).unwrap().0;
        assert!(html.contains("Welcome back!"));
        assert!(html.contains("You are signed in as a@b.com"));
        assert!(html.contains("User Email:"));
        assert!(html.contains("<p class=\"mono\">a@b.com</p>"));

        let html = render(&HomePage::welcome()).unwrap().0;
        assert!(html.contains("Welcome to Anggar"));
        assert!(html.contains("Sign in to get started."));
        assert!(!html.contains("User Email:"));
        assert!(html.contains("href=\"/login\""));
    }
}
