//! Domain-level constants.
//!
//! These constants define routes, validation rules and provider error codes.

// =============================================================================
// Routes
// =============================================================================

/// Application root, target of every successful sign-in, sign-up or sign-out
pub const ROOT_PATH: &str = "/";

/// Sign-in page
pub const LOGIN_PATH: &str = "/login";

/// Sign-up page
pub const SIGNUP_PATH: &str = "/signup";

/// Sign-out action on the home page
pub const SIGN_OUT_PATH: &str = "/sign-out";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length accepted by the sign-up form
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Shown when the email field is not a syntactically valid address
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";

/// Shown when the sign-in password is empty
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";

/// Shown when the sign-up password is below [`MIN_PASSWORD_LENGTH`]
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Shown on the confirmation field when it differs from the password
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match";

// =============================================================================
// Provider error codes
// =============================================================================

/// Prefix shared by every provider authentication error code
pub const AUTH_CODE_PREFIX: &str = "auth/";

/// Code reported when the provider cannot be reached
pub const CODE_NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";

/// Fallback sentence for codes the translator does not know
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again";
