//! Pages Library
//!
//! Rendering-independent behaviour of the three pages: the auth-state gate
//! each page runs behind, the credential form controllers of the login and
//! signup pages, and the home page's sign-out action.

pub mod action;
pub mod form;
pub mod gate;
pub mod home;

pub use action::SubmitAction;
pub use form::{FormController, FormSnapshot, SubmitOutcome};
pub use gate::GateWatcher;

/// Controller of the login page form
pub type SignInForm = form::FormController<domain::SignInCredentials>;

/// Controller of the signup page form
pub type SignUpForm = form::FormController<domain::SignUpCredentials>;
