//! Admin authentication tests: the gate, login, logout, and session restore.

#![allow(clippy::unwrap_used)]

use vetx_integration_tests::{TEST_PASSWORD, TestApp, body_string, location};

#[tokio::test]
async fn dashboard_redirects_to_login_when_logged_out() {
    let app = TestApp::new();

    let response = app.get("/admin").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn every_admin_page_is_gated() {
    let app = TestApp::new();

    for uri in ["/admin", "/admin/products/new", "/admin/products/1/edit", "/admin/company"] {
        let response = app.get(uri).await;
        assert!(response.status().is_redirection(), "{uri} should redirect");
        assert_eq!(location(&response), "/admin/login", "{uri}");
    }
}

#[tokio::test]
async fn login_page_renders_when_logged_out() {
    let app = TestApp::new();

    let response = app.get("/admin/login").await;
    assert_eq!(response.status(), 200);

    let body = body_string(response).await;
    assert!(body.contains("Admin Login"));
}

#[tokio::test]
async fn login_page_redirects_to_dashboard_when_already_logged_in() {
    let app = TestApp::logged_in();

    let response = app.get("/admin/login").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn correct_password_logs_in_and_unlocks_the_dashboard() {
    let app = TestApp::new();

    let response = app
        .post_form("/admin/login", &format!("password={TEST_PASSWORD}"))
        .await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/admin");
    assert!(app.store().is_authenticated());

    let response = app.get("/admin").await;
    assert_eq!(response.status(), 200);

    let body = body_string(response).await;
    assert!(body.contains("Dashboard"));
    assert!(body.contains("VetX Amoxicillin 500mg"));
}

#[tokio::test]
async fn wrong_password_re_renders_the_login_page_with_an_error() {
    let app = TestApp::new();

    let response = app.post_form("/admin/login", "password=nope").await;
    assert_eq!(response.status(), 200);
    assert!(!app.store().is_authenticated());

    let body = body_string(response).await;
    assert!(body.contains("Invalid password. Please try again."));
}

#[tokio::test]
async fn logout_locks_the_dashboard_again() {
    let app = TestApp::logged_in();

    let response = app.post_form("/admin/logout", "").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/admin/login");
    assert!(!app.store().is_authenticated());

    let response = app.get("/admin").await;
    assert!(response.status().is_redirection());
}

#[tokio::test]
async fn persisted_flag_restores_the_session() {
    // A mirror holding the flag value stands in for a previous session
    let app = TestApp::logged_in();

    assert!(app.store().is_authenticated());
    let response = app.get("/admin").await;
    assert_eq!(response.status(), 200);
}
