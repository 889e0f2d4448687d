//! Domain layer - Credential forms, auth state and error translation.
//!
//! This crate contains pure logic with no infrastructure dependencies.
//! The provider, page and web crates all build on these types.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod session;
pub mod translator;

pub use constants::*;
pub use credentials::{CredentialForm, FieldErrors, FormField, SignInCredentials, SignUpCredentials};
pub use error::{AuthError, AuthResult};
pub use gate::{evaluate, GateView, Surface};
pub use session::{AuthSnapshot, AuthStatus, SessionUser};
pub use translator::{translate, translate_opt, AuthErrorCode};
