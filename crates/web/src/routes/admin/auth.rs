//! Authentication route handlers for the admin panel.

use std::time::Duration;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::filters;
use crate::state::AppState;

/// Artificial delay before reporting a login result, so the submit button's
/// loading state is visible. Not part of the auth contract.
const LOGIN_DELAY: Duration = Duration::from_millis(400);

/// Message shown when the password does not match.
const INVALID_PASSWORD: &str = "Invalid password. Please try again.";

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Login form submission.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Render the login page.
///
/// GET /admin/login
pub async fn login_page(State(state): State<AppState>) -> Response {
    if state.store().is_authenticated() {
        return Redirect::to("/admin").into_response();
    }

    LoginTemplate { error: None }.into_response()
}

/// Attempt to log in.
///
/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response {
    tokio::time::sleep(LOGIN_DELAY).await;

    if state.store().login(&form.password) {
        Redirect::to("/admin").into_response()
    } else {
        LoginTemplate {
            error: Some(INVALID_PASSWORD.to_string()),
        }
        .into_response()
    }
}

/// Log out and return to the login page.
///
/// POST /admin/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.store().logout();
    Redirect::to("/admin/login")
}
