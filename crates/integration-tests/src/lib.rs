//! Integration tests for the VetX Pharma site.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`,
//! so no server, port, or external state is needed. Each [`TestApp`] owns a
//! fresh seeded store backed by a [`MemoryAuthMirror`].
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vetx-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `public_site` - Home page and product filtering
//! - `admin_auth` - Login, logout, and the auth gate
//! - `admin_products` - Product CRUD through the admin forms
//! - `admin_company` - Company profile updates

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::IpAddr;
use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use secrecy::SecretString;
use tower::ServiceExt;

use vetx_store::mirror::AUTH_FLAG_VALUE;
use vetx_store::{MemoryAuthMirror, Store};
use vetx_web::config::SiteConfig;
use vetx_web::routes;
use vetx_web::state::AppState;

/// Password every test app accepts.
pub const TEST_PASSWORD: &str = "test-password";

/// Maximum response body size to buffer in tests.
const BODY_LIMIT: usize = 1024 * 1024;

/// An in-process instance of the site with a fresh seeded store.
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    /// Create an app that starts logged out.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mirror(MemoryAuthMirror::new())
    }

    /// Create an app that starts logged in, as after a prior session.
    #[must_use]
    pub fn logged_in() -> Self {
        Self::with_mirror(MemoryAuthMirror::with_value(AUTH_FLAG_VALUE))
    }

    /// Create an app around a specific mirror state.
    #[must_use]
    pub fn with_mirror(mirror: MemoryAuthMirror) -> Self {
        let config = SiteConfig {
            host: "127.0.0.1".parse::<IpAddr>().unwrap(),
            port: 0,
            state_dir: PathBuf::from(".test-state"),
            admin_password: SecretString::from(TEST_PASSWORD),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let store = Store::new(SecretString::from(TEST_PASSWORD), Box::new(mirror));
        let state = AppState::new(config, store);
        let router = routes::routes().with_state(state.clone());

        Self { router, state }
    }

    /// The store behind the app, for asserting on state directly.
    #[must_use]
    pub fn store(&self) -> &vetx_store::Store {
        self.state.store()
    }

    /// Issue a GET request.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Issue a POST with an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Log in through the login form, asserting success.
    pub async fn login(&self) {
        let response = self
            .post_form("/admin/login", &format!("password={TEST_PASSWORD}"))
            .await;
        assert!(response.status().is_redirection(), "login should redirect");
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a response body to a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Percent-encode a single form field value.
#[must_use]
pub fn form_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
