//! Domain-level errors.
//!
//! [`AuthError`] is the error value reported by the authentication provider.
//! It is independent of the transport the provider uses.

use thiserror::Error;

use crate::constants::CODE_NETWORK_REQUEST_FAILED;
use crate::translator::{translate, AuthErrorCode};

/// Error reported by the authentication provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct AuthError {
    /// Provider error code, e.g. `auth/wrong-password` (may be empty)
    pub code: String,
    /// Raw provider message, used when no code is available
    pub message: String,
}

impl AuthError {
    /// Create an error from a provider code
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            message: code.clone(),
            code,
        }
    }

    /// Create an error from a code and a raw message
    pub fn with_message(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create an error that carries no provider code
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            message: message.into(),
        }
    }

    /// Provider could not be reached
    pub fn network(message: impl Into<String>) -> Self {
        Self::with_message(CODE_NETWORK_REQUEST_FAILED, message)
    }

    /// Known code, if the provider reported one from the translation table
    pub fn kind(&self) -> Option<AuthErrorCode> {
        AuthErrorCode::from_code(&self.code)
    }

    /// Sentence to display for this error.
    ///
    /// The code is looked up first; an empty code falls back to the raw
    /// message before the generic sentence.
    pub fn user_message(&self) -> &'static str {
        if self.code.is_empty() {
            translate(&self.message)
        } else {
            translate(&self.code)
        }
    }
}

impl From<AuthErrorCode> for AuthError {
    fn from(code: AuthErrorCode) -> Self {
        AuthError::new(code.as_str())
    }
}

/// Result type alias for provider operations
pub type AuthResult<T> = Result<T, AuthError>;
