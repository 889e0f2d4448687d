//! Provider error code translation.
//!
//! Maps the codes reported by the authentication provider to the sentences
//! shown to the user. The lookup is an exact match; anything outside the
//! table, including the empty string, yields [`FALLBACK_ERROR_MESSAGE`].

use std::fmt;

use crate::constants::FALLBACK_ERROR_MESSAGE;

/// Provider error codes with a dedicated user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    InvalidEmail,
    UserDisabled,
    UserNotFound,
    WrongPassword,
    EmailAlreadyInUse,
    WeakPassword,
    OperationNotAllowed,
    TooManyRequests,
    NetworkRequestFailed,
    InvalidCredential,
    RequiresRecentLogin,
    InvalidVerificationCode,
    InvalidVerificationId,
}

impl AuthErrorCode {
    /// Every known code, in table order
    pub const ALL: [AuthErrorCode; 13] = [
        AuthErrorCode::InvalidEmail,
        AuthErrorCode::UserDisabled,
        AuthErrorCode::UserNotFound,
        AuthErrorCode::WrongPassword,
        AuthErrorCode::EmailAlreadyInUse,
        AuthErrorCode::WeakPassword,
        AuthErrorCode::OperationNotAllowed,
        AuthErrorCode::TooManyRequests,
        AuthErrorCode::NetworkRequestFailed,
        AuthErrorCode::InvalidCredential,
        AuthErrorCode::RequiresRecentLogin,
        AuthErrorCode::InvalidVerificationCode,
        AuthErrorCode::InvalidVerificationId,
    ];

    /// Look up a code by its exact wire form (e.g. `auth/wrong-password`).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = match code {
            "auth/invalid-email" => AuthErrorCode::InvalidEmail,
            "auth/user-disabled" => AuthErrorCode::UserDisabled,
            "auth/user-not-found" => AuthErrorCode::UserNotFound,
            "auth/wrong-password" => AuthErrorCode::WrongPassword,
            "auth/email-already-in-use" => AuthErrorCode::EmailAlreadyInUse,
            "auth/weak-password" => AuthErrorCode::WeakPassword,
            "auth/operation-not-allowed" => AuthErrorCode::OperationNotAllowed,
            "auth/too-many-requests" => AuthErrorCode::TooManyRequests,
            "auth/network-request-failed" => AuthErrorCode::NetworkRequestFailed,
            "auth/invalid-credential" => AuthErrorCode::InvalidCredential,
            "auth/requires-recent-login" => AuthErrorCode::RequiresRecentLogin,
            "auth/invalid-verification-code" => AuthErrorCode::InvalidVerificationCode,
            "auth/invalid-verification-id" => AuthErrorCode::InvalidVerificationId,
            _ => return None,
        };
        Some(code)
    }

    /// Wire form of the code
    pub fn as_str(self) -> &'static str {
        match self {
            AuthErrorCode::InvalidEmail => "auth/invalid-email",
            AuthErrorCode::UserDisabled => "auth/user-disabled",
            AuthErrorCode::UserNotFound => "auth/user-not-found",
            AuthErrorCode::WrongPassword => "auth/wrong-password",
            AuthErrorCode::EmailAlreadyInUse => "auth/email-already-in-use",
            AuthErrorCode::WeakPassword => "auth/weak-password",
            AuthErrorCode::OperationNotAllowed => "auth/operation-not-allowed",
            AuthErrorCode::TooManyRequests => "auth/too-many-requests",
            AuthErrorCode::NetworkRequestFailed => "auth/network-request-failed",
            AuthErrorCode::InvalidCredential => "auth/invalid-credential",
            AuthErrorCode::RequiresRecentLogin => "auth/requires-recent-login",
            AuthErrorCode::InvalidVerificationCode => "auth/invalid-verification-code",
            AuthErrorCode::InvalidVerificationId => "auth/invalid-verification-id",
        }
    }

    /// User-facing sentence for the code
    pub fn message(self) -> &'static str {
        match self {
            AuthErrorCode::InvalidEmail => "Please enter a valid email address",
            AuthErrorCode::UserDisabled => "This account has been disabled. Please contact support",
            AuthErrorCode::UserNotFound => "No account found with this email address",
            AuthErrorCode::WrongPassword => "Incorrect password. Please try again",
            AuthErrorCode::EmailAlreadyInUse => "An account with this email already exists",
            AuthErrorCode::WeakPassword => "Password should be at least 6 characters long",
            AuthErrorCode::OperationNotAllowed => "This sign-in method is currently disabled",
            AuthErrorCode::TooManyRequests => "Too many failed attempts. Please try again later",
            AuthErrorCode::NetworkRequestFailed => {
                "Network error. Please check your internet connection"
            }
            AuthErrorCode::InvalidCredential => "Invalid email or password. Please try again",
            AuthErrorCode::RequiresRecentLogin => "Please sign in again to continue",
            AuthErrorCode::InvalidVerificationCode => "Invalid verification code",
            AuthErrorCode::InvalidVerificationId => "Invalid verification ID",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate a provider error code into a user-facing sentence.
pub fn translate(code: &str) -> &'static str {
    AuthErrorCode::from_code(code)
        .map(AuthErrorCode::message)
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
}

/// Translate a possibly absent code; absence behaves like an unknown code.
pub fn translate_opt(code: Option<&str>) -> &'static str {
    code.map(translate).unwrap_or(FALLBACK_ERROR_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_to_their_sentence() {
        let expected = [
            ("auth/invalid-email", "Please enter a valid email address"),
            ("auth/user-disabled", "This account has been disabled. Please contact support"),
            ("auth/user-not-found", "No account found with this email address"),
            ("auth/wrong-password", "Incorrect password. Please try again"),
            ("auth/email-already-in-use", "An account with this email already exists"),
            ("auth/weak-password", "Password should be at least 6 characters long"),
            ("auth/operation-not-allowed", "This sign-in method is currently disabled"),
            ("auth/too-many-requests", "Too many failed attempts. Please try again later"),
            (
                "auth/network-request-failed",
                "Network error. Please check your internet connection",
            ),
            ("auth/invalid-credential", "Invalid email or password. Please try again"),
            ("auth/requires-recent-login", "Please sign in again to continue"),
            ("auth/invalid-verification-code", "Invalid verification code"),
            ("auth/invalid-verification-id", "Invalid verification ID"),
        ];

        for (code, message) in expected {
            assert_eq!(translate(code), message, "code {code}");
        }
        assert_eq!(expected.len(), AuthErrorCode::ALL.len());
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in ["", "auth/unknown", "wrong-password", "AUTH/WRONG-PASSWORD", " auth/invalid-email"] {
            assert_eq!(translate(code), FALLBACK_ERROR_MESSAGE, "code {code:?}");
        }
        assert_eq!(
            translate_opt(None),
            "An unexpected error occurred. Please try again"
        );
    }

    #[test]
    fn test_code_wire_form_is_stable() {
        for code in AuthErrorCode::ALL {
            assert_eq!(AuthErrorCode::from_code(code.as_str()), Some(code));
            assert_eq!(code.to_string(), code.as_str());
            assert!(!code.message().is_empty());
        }
    }
}
