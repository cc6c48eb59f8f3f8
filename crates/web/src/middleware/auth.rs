//! Authentication extractor for the admin panel.
//!
//! Authentication is a single process-wide flag held by the store (one
//! shared admin, matching the original site), so the gate is just a check
//! against it.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;

/// Extractor that requires admin authentication.
///
/// If the admin is not logged in, the request is redirected to the login
/// page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _auth: RequireAdminAuth,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     // only reachable while authenticated
/// }
/// ```
pub struct RequireAdminAuth;

/// Error returned when admin authentication is required but absent.
pub struct AdminAuthRejection;

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        Redirect::to("/admin/login").into_response()
    }
}

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.store().is_authenticated() {
            Ok(Self)
        } else {
            Err(AdminAuthRejection)
        }
    }
}
