//! Login and signup page handlers.
//!
//! `GET` runs the gate and shows a fresh form. `POST` hands the posted
//! values to the browser's form controller, which applies and submits them
//! as one step.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use tracing::debug;

use auth_provider::AuthProvider;
use common::{AppError, AppResult};
use domain::{CredentialForm, FormField, GateView, Surface, LOGIN_PATH, SIGNUP_PATH};
use pages::{FormController, SubmitAction, SubmitOutcome};

use super::{divert, gate};
use crate::registry::BrowserClient;
use crate::state::AppState;
use crate::views::{render, FormView, LoginPage, SignupPage};

/// Create login and signup routes.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page).post(login_submit))
        .route(SIGNUP_PATH, get(signup_page).post(signup_submit))
}

fn login_response(client: &BrowserClient, status: StatusCode) -> AppResult<Response> {
    let page = LoginPage {
        form: FormView::sign_in(&client.sign_in_form().snapshot()),
        signup_path: SIGNUP_PATH,
    };
    Ok((status, render(&page)?).into_response())
}

fn signup_response(client: &BrowserClient, status: StatusCode) -> AppResult<Response> {
    let page = SignupPage {
        form: FormView::sign_up(&client.sign_up_form().snapshot()),
        login_path: LOGIN_PATH,
    };
    Ok((status, render(&page)?).into_response())
}

/// Submit the posted values; `None` means the page should be re-rendered.
async fn submit<F>(
    form: &FormController<F>,
    provider: &dyn AuthProvider,
    posted: &HashMap<String, String>,
) -> AppResult<Option<Response>>
where
    F: CredentialForm + SubmitAction,
{
    let edits: Vec<(FormField, String)> = F::FIELDS
        .iter()
        .filter_map(|&field| posted.get(field.name()).map(|value| (field, value.clone())))
        .collect();

    match form.submit_with(provider, &edits).await {
        SubmitOutcome::Navigate(path) => Ok(Some(Redirect::to(path).into_response())),
        SubmitOutcome::Ignored => Err(AppError::SubmissionInFlight),
        SubmitOutcome::Invalid(errors) => {
            debug!(fields = errors.len(), "Form failed validation");
            Ok(None)
        }
        SubmitOutcome::Failed(_) => Ok(None),
    }
}

pub async fn login_page(
    State(state): State<AppState>,
    Extension(client): Extension<Arc<BrowserClient>>,
) -> AppResult<Response> {
    let view = gate(&state, &client, Surface::SignIn).await;
    if let Some(response) = divert(&view)? {
        return Ok(response);
    }
    client.sign_in_form().reset();
    login_response(&client, StatusCode::OK)
}

pub async fn login_submit(
    State(state): State<AppState>,
    Extension(client): Extension<Arc<BrowserClient>>,
    Form(posted): Form<HashMap<String, String>>,
) -> AppResult<Response> {
    let view = gate(&state, &client, Surface::SignIn).await;
    if view != GateView::Form {
        return Ok(divert(&view)?.unwrap_or_else(|| Redirect::to(LOGIN_PATH).into_response()));
    }

    match submit(client.sign_in_form(), client.provider(), &posted).await? {
        Some(response) => Ok(response),
        None => login_response(&client, StatusCode::UNPROCESSABLE_ENTITY),
    }
}

pub async fn signup_page(
    State(state): State<AppState>,
    Extension(client): Extension<Arc<BrowserClient>>,
) -> AppResult<Response> {
    let view = gate(&state, &client, Surface::SignUp).await;
    if let Some(response) = divert(&view)? {
        return Ok(response);
    }
    client.sign_up_form().reset();
    signup_response(&client, StatusCode::OK)
}

pub async fn signup_submit(
    State(state): State<AppState>,
    Extension(client): Extension<Arc<BrowserClient>>,
    Form(posted): Form<HashMap<String, String>>,
) -> AppResult<Response> {
    let view = gate(&state, &client, Surface::SignUp).await;
    if view != GateView::Form {
        return Ok(divert(&view)?.unwrap_or_else(|| Redirect::to(SIGNUP_PATH).into_response()));
    }

    match submit(client.sign_up_form(), client.provider(), &posted).await? {
        Some(response) => Ok(response),
        None => signup_response(&client, StatusCode::UNPROCESSABLE_ENTITY),
    }
}
