//! Firebase Identity Toolkit REST client.
//!
//! Talks to `accounts:signInWithPassword` and `accounts:signUp` and maps the
//! REST error reasons onto the SDK-style `auth/*` codes the translator knows.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{AppError, AppResult, FirebaseConfig};
use domain::{AuthError, AuthErrorCode, AuthResult, AUTH_CODE_PREFIX};

use crate::api::{IdentityApi, SignedInAccount};

/// HTTP client for the Identity Toolkit v1 API.
#[derive(Clone)]
pub struct IdentityToolkitClient {
    http: Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

// Token fields are not kept: sessions end locally on sign-out
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountBody {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

impl IdentityToolkitClient {
    /// Build a client from configuration.
    pub fn new(config: &FirebaseConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::config(format!("HTTP client: {}", e)))?;

        Ok(Self::with_client(http, &config.identity_url, &config.api_key))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            api_key: Arc::from(api_key),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn password_call(&self, endpoint: &str, email: &str, password: &str) -> AuthResult<SignedInAccount> {
        let url = format!("{}/v1/accounts:{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .query(&[("key", &*self.api_key)])
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AuthError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let envelope = response.json::<ErrorEnvelope>().await.map_err(|_| {
                AuthError::unknown(format!("{} returned {} without an error body", endpoint, status))
            })?;
            let message = envelope.error.message;
            return Err(AuthError::with_message(rest_error_code(&message), message));
        }

        let body = response
            .json::<AccountBody>()
            .await
            .map_err(|e| AuthError::unknown(format!("malformed {} response: {}", endpoint, e)))?;

        Ok(SignedInAccount {
            local_id: body.local_id,
            email: body.email,
        })
    }
}

#[async_trait]
impl IdentityApi for IdentityToolkitClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<SignedInAccount> {
        self.password_call("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<SignedInAccount> {
        self.password_call("signUp", email, password).await
    }
}

/// Map a REST error message (e.g. `WEAK_PASSWORD : Password should be...`)
/// to an `auth/*` code.
///
/// Reasons without a dedicated code keep their own name, which the
/// translator then treats as unknown.
pub fn rest_error_code(message: &str) -> String {
    let reason = message.split(':').next().unwrap_or_default().trim();

    let known = match reason {
        "INVALID_EMAIL" => Some(AuthErrorCode::InvalidEmail),
        "USER_DISABLED" => Some(AuthErrorCode::UserDisabled),
        "EMAIL_NOT_FOUND" => Some(AuthErrorCode::UserNotFound),
        "INVALID_PASSWORD" => Some(AuthErrorCode::WrongPassword),
        "EMAIL_EXISTS" => Some(AuthErrorCode::EmailAlreadyInUse),
        "WEAK_PASSWORD" => Some(AuthErrorCode::WeakPassword),
        "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => {
            Some(AuthErrorCode::OperationNotAllowed)
        }
        "TOO_MANY_ATTEMPTS_TRY_LATER" => Some(AuthErrorCode::TooManyRequests),
        "INVALID_LOGIN_CREDENTIALS" => Some(AuthErrorCode::InvalidCredential),
        "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => Some(AuthErrorCode::RequiresRecentLogin),
        "INVALID_CODE" => Some(AuthErrorCode::InvalidVerificationCode),
        "INVALID_SESSION_INFO" => Some(AuthErrorCode::InvalidVerificationId),
        _ => None,
    };

    match known {
        Some(code) => code.as_str().to_string(),
        None => format!(
            "{}{}",
            AUTH_CODE_PREFIX,
            reason.to_ascii_lowercase().replace('_', "-")
        ),
    }
}
