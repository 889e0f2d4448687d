//! Unified application error.
//!
//! Wraps validation failures, provider errors and internal faults, and
//! converts them into HTTP responses for the web layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{AuthError, AuthErrorCode, FieldErrors, FALLBACK_ERROR_MESSAGE};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client-side validation
    #[error("Validation failed")]
    Validation(FieldErrors),

    // Provider rejected the request
    #[error("Provider error: {0}")]
    Provider(#[from] AuthError),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Resource not found")]
    NotFound,

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Provider(_) => "PROVIDER_ERROR",
            AppError::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            AppError::NotFound => "NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Provider(err) => provider_status(err),
            AppError::SubmissionInFlight => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors
                .iter()
                .next()
                .map(|(_, message)| message.to_string())
                .unwrap_or_else(|| "Validation failed".to_string()),
            AppError::Provider(err) => err.user_message().to_string(),

            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            AppError::Template(msg) => {
                tracing::error!("Template error: {}", msg);
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                FALLBACK_ERROR_MESSAGE.to_string()
            }

            _ => self.to_string(),
        }
    }
}

fn provider_status(err: &AuthError) -> StatusCode {
    match err.kind() {
        Some(AuthErrorCode::TooManyRequests) => StatusCode::TOO_MANY_REQUESTS,
        Some(AuthErrorCode::NetworkRequestFailed) => StatusCode::BAD_GATEWAY,
        Some(AuthErrorCode::EmailAlreadyInUse) => StatusCode::CONFLICT,
        Some(AuthErrorCode::UserDisabled | AuthErrorCode::OperationNotAllowed) => {
            StatusCode::FORBIDDEN
        }
        Some(_) => StatusCode::UNAUTHORIZED,
        None => StatusCode::BAD_GATEWAY,
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        AppError::Template(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
