//! Admin panel route handlers.
//!
//! Everything except the login page sits behind the
//! [`RequireAdminAuth`](crate::middleware::RequireAdminAuth) extractor, which
//! redirects anonymous requests to `/admin/login`.

pub mod auth;
pub mod company;
pub mod dashboard;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the admin router (nested under `/admin`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/products/new", get(products::new_form))
        .route("/products", post(products::create))
        .route("/products/{id}/edit", get(products::edit_form))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/delete", post(products::delete))
        .route("/company", get(company::form).post(company::update))
}
