//! Route configuration.

use axum::{middleware, Router};

use common::AppError;

use crate::handlers::{auth_routes, health_routes, home_routes};
use crate::middleware::browser_client_middleware;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Pages run against the caller's browser client
    let pages = Router::new()
        .merge(home_routes())
        .merge(auth_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            browser_client_middleware,
        ));

    Router::new()
        // Health check (no client cookie)
        .nest("/health", health_routes())
        .merge(pages)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
