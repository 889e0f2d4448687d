//! Web Library
//!
//! Serves the home, login and signup pages over HTTP, rendering each one
//! behind the auth-state gate of the calling browser.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod registry;
pub mod routes;
pub mod state;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use auth_provider::IdentityToolkitClient;

use crate::config::WebConfig;
use crate::registry::{spawn_sweeper, ClientRegistry, FirebaseProviderFactory};
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: WebConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Identity Toolkit client shared by every browser's provider
    let client = IdentityToolkitClient::new(&config.firebase)?;
    info!(identity_url = %client.base_url(), "Using Firebase Identity Toolkit");

    let registry = Arc::new(ClientRegistry::new(
        Arc::new(FirebaseProviderFactory::new(client)),
        config.max_clients,
    ));
    let sweeper = spawn_sweeper(
        registry.clone(),
        config.sweep_interval(),
        config.client_idle(),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // Build router
    let state = AppState::new(registry, config);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!("Anggar listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app).await;

    sweeper.abort();
    served?;
    Ok(())
}
