//! Shared configuration structures.

use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Production Identity Toolkit endpoint
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";

/// API key accepted by the local auth emulator
pub const EMULATOR_API_KEY: &str = "demo-api-key";

/// Firebase Authentication connection settings.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Web API key of the Firebase project
    pub api_key: String,
    /// Identity Toolkit base URL (without the `/v1` suffix)
    pub identity_url: String,
    /// Timeout for each provider request in milliseconds
    pub request_timeout_ms: u64,
}

impl FirebaseConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `FIREBASE_IDENTITY_URL` wins over `FIREBASE_AUTH_EMULATOR_HOST`; when
    /// the emulator is used the API key becomes optional.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let emulator_host = lookup("FIREBASE_AUTH_EMULATOR_HOST").filter(|h| !h.is_empty());

        let identity_url = match (lookup("FIREBASE_IDENTITY_URL"), &emulator_host) {
            (Some(url), _) if !url.is_empty() => url,
            (_, Some(host)) => format!("http://{}/identitytoolkit.googleapis.com", host),
            _ => DEFAULT_IDENTITY_URL.to_string(),
        };

        let api_key = match (lookup("FIREBASE_API_KEY"), &emulator_host) {
            (Some(key), _) if !key.is_empty() => key,
            (_, Some(_)) => EMULATOR_API_KEY.to_string(),
            _ => return Err(AppError::config("FIREBASE_API_KEY must be set")),
        };

        let request_timeout_ms = lookup("FIREBASE_REQUEST_TIMEOUT_MS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(10_000);

        Ok(Self {
            api_key,
            identity_url: identity_url.trim_end_matches('/').to_string(),
            request_timeout_ms,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_api_key_required_without_emulator() {
        let result = FirebaseConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_production_defaults() {
        let config = FirebaseConfig::from_lookup(lookup(&[("FIREBASE_API_KEY", "key-123")])).unwrap();
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.identity_url, DEFAULT_IDENTITY_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_emulator_host() {
        let config =
            FirebaseConfig::from_lookup(lookup(&[("FIREBASE_AUTH_EMULATOR_HOST", "127.0.0.1:9099")]))
                .unwrap();
        assert_eq!(
            config.identity_url,
            "http://127.0.0.1:9099/identitytoolkit.googleapis.com"
        );
        assert_eq!(config.api_key, EMULATOR_API_KEY);
    }

    #[test]
    fn test_explicit_url_wins() {
        let config = FirebaseConfig::from_lookup(lookup(&[
            ("FIREBASE_API_KEY", "key"),
            ("FIREBASE_AUTH_EMULATOR_HOST", "127.0.0.1:9099"),
            ("FIREBASE_IDENTITY_URL", "http://localhost:8080/"),
            ("FIREBASE_REQUEST_TIMEOUT_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.identity_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_ms, 250);
    }
}
