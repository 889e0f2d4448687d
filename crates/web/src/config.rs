//! Web server configuration.

use std::env;
use std::time::Duration;

use common::{AppResult, FirebaseConfig};

/// Cookie carrying the browser client id unless overridden
pub const DEFAULT_COOKIE_NAME: &str = "anggar_client";

const DEFAULT_MAX_CLIENTS: usize = 10_000;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Name of the browser client cookie
    pub cookie_name: String,
    /// Browser clients idle longer than this are dropped
    pub client_idle_seconds: u64,
    /// Upper bound on live browser clients
    pub max_clients: usize,
    /// Period of the idle client sweep
    pub sweep_interval_seconds: u64,
    /// How long a page waits for the provider to leave `loading`
    pub settle_timeout_ms: u64,
    /// Authentication provider settings
    pub firebase: FirebaseConfig,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let firebase = FirebaseConfig::from_lookup(&lookup)?;

        Ok(Self {
            host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("WEB_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            cookie_name: lookup("WEB_COOKIE_NAME")
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            client_idle_seconds: lookup("WEB_CLIENT_IDLE_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1800),
            max_clients: lookup("WEB_MAX_CLIENTS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_MAX_CLIENTS),
            sweep_interval_seconds: lookup("WEB_SWEEP_INTERVAL_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            settle_timeout_ms: lookup("WEB_SETTLE_TIMEOUT_MS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(2_000),
            firebase,
        })
    }

    pub fn client_idle(&self) -> Duration {
        Duration::from_secs(self.client_idle_seconds)
    }

    pub fn sweep_interval(&self) -> Duration {
        // A zero period would make the sweeper spin
        Duration::from_secs(self.sweep_interval_seconds.max(1))
    }

    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            client_idle_seconds: 1800,
            max_clients: DEFAULT_MAX_CLIENTS,
            sweep_interval_seconds: 60,
            settle_timeout_ms: 2_000,
            firebase: FirebaseConfig::default(),
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
    fn test_defaults() {
        let config = WebConfig::from_lookup(lookup(&[("FIREBASE_API_KEY", "key")])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cookie_name, "anggar_client");
        assert_eq!(config.client_idle(), Duration::from_secs(1800));
        assert_eq!(config.max_clients, 10_000);
        assert_eq!(config.settle_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_overrides() {
        let config = WebConfig::from_lookup(lookup(&[
            ("FIREBASE_AUTH_EMULATOR_HOST", "localhost:9099"),
            ("WEB_PORT", "8080"),
            ("WEB_COOKIE_NAME", "sid"),
            ("WEB_SWEEP_INTERVAL_SECONDS", "0"),
            ("WEB_MAX_CLIENTS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cookie_name, "sid");
        assert_eq!(config.sweep_interval(), Duration::from_secs(1));
        assert_eq!(config.max_clients, 250);
        assert_eq!(
            config.firebase.identity_url,
            "http://localhost:9099/identitytoolkit.googleapis.com"
        );
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        assert!(WebConfig::from_lookup(lookup(&[])).is_err());
    }
}
