//! Browser client middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::state::AppState;

/// Attach the caller's [`BrowserClient`](crate::registry::BrowserClient) to
/// the request, issuing the client cookie when a new client is created.
pub async fn browser_client_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let known = jar
        .get(&state.config.cookie_name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    let (client, created) = state.registry.resolve(known);
    let id = client.id();
    request.extensions_mut().insert(client);

    let response = next.run(request).await;
    if !created {
        return response;
    }

    let cookie = Cookie::build((state.config.cookie_name.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), response).into_response()
}
