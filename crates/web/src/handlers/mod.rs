//! HTTP handlers.

mod auth_handler;
mod health_handler;
mod home_handler;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;
pub use home_handler::home_routes;

use axum::response::{IntoResponse, Redirect, Response};

use common::AppResult;
use domain::{GateView, Surface};
use pages::GateWatcher;

use crate::registry::BrowserClient;
use crate::state::AppState;
use crate::views::{render, LoadingPage};

/// Gate decision for a page, waiting up to the settle timeout for the
/// provider to leave `loading`.
async fn gate(state: &AppState, client: &BrowserClient, surface: Surface) -> GateView {
    let mut watcher = GateWatcher::new(surface, client.provider());
    let settled = tokio::time::timeout(state.config.settle_timeout(), watcher.settled()).await;
    match settled {
        Ok(view) => view,
        Err(_) => watcher.current(),
    }
}

/// Response for gate views that replace the page content.
fn divert(view: &GateView) -> AppResult<Option<Response>> {
    match view {
        GateView::Waiting => Ok(Some(render(&LoadingPage::default())?.into_response())),
        GateView::Redirect(path) => Ok(Some(Redirect::to(path).into_response())),
        _ => Ok(None),
    }
}
