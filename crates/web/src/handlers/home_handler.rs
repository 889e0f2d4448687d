//! Home page handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Router,
};

use common::AppResult;
use domain::{GateView, Surface, ROOT_PATH, SIGN_OUT_PATH};
use pages::home;

use super::{divert, gate};
use crate::registry::BrowserClient;
use crate::state::AppState;
use crate::views::{render, HomePage};

/// Create home routes.
pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route(ROOT_PATH, get(home_page))
        .route(SIGN_OUT_PATH, post(sign_out))
}

pub async fn home_page(
    State(state): State<AppState>,
    Extension(client): Extension<Arc<BrowserClient>>,
) -> AppResult<Response> {
    let view = gate(&state, &client, Surface::Home).await;
    if let Some(response) = divert(&view)? {
        return Ok(response);
    }

    let page = match view {
        GateView::Personalized { email } => HomePage::signed_in(email),
        _ => HomePage::welcome(),
    };
    Ok(render(&page)?.into_response())
}

pub async fn sign_out(Extension(client): Extension<Arc<BrowserClient>>) -> Redirect {
    Redirect::to(home::sign_out(client.provider()).await)
}
