//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::registry::ClientRegistry;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ClientRegistry>,
    pub config: Arc<WebConfig>,
}

impl AppState {
    /// Create new app state.
    pub fn new(registry: Arc<ClientRegistry>, config: WebConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }
}
