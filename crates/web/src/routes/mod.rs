//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page (hero, about, services, products, contact)
//! GET  /products/grid            - Product grid fragment (HTMX live search)
//!
//! # Admin panel
//! GET  /admin                    - Dashboard (requires auth)
//! GET  /admin/login              - Login page
//! POST /admin/login              - Login action
//! POST /admin/logout             - Logout action
//! GET  /admin/products/new       - New product form
//! POST /admin/products           - Create product
//! GET  /admin/products/{id}/edit - Edit product form
//! POST /admin/products/{id}      - Update product
//! POST /admin/products/{id}/delete - Delete product
//! GET  /admin/company            - Company profile form
//! POST /admin/company            - Update company profile
//! ```

pub mod admin;
pub mod home;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public site
        .route("/", get(home::home))
        .route("/products/grid", get(products::grid))
        // Admin panel
        .nest("/admin", admin::router())
}
