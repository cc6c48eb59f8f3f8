//! Public site tests: home page rendering and catalog filtering.

#![allow(clippy::unwrap_used)]

use vetx_integration_tests::{TestApp, body_string, form_encode};

#[tokio::test]
async fn home_page_shows_company_and_full_catalog() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status(), 200);

    let body = body_string(response).await;
    assert!(body.contains("VET_X PHARMA"));
    assert!(body.contains("Haresh L Kanetiya"));
    assert!(body.contains("VetX Amoxicillin 500mg"));
    assert!(body.contains("VetX Antiseptic Solution"));
    assert!(body.contains("₹120"));
}

#[tokio::test]
async fn search_narrows_the_catalog() {
    let app = TestApp::new();

    let response = app.get("/?q=calcium").await;
    let body = body_string(response).await;

    assert!(body.contains("VetX Calcium Plus"));
    assert!(!body.contains("VetX Dewormer Pro"));
}

#[tokio::test]
async fn search_matches_descriptions_too() {
    let app = TestApp::new();

    // "deworming" appears only in the Dewormer Pro description
    let response = app.get("/?q=deworming").await;
    let body = body_string(response).await;

    assert!(body.contains("VetX Dewormer Pro"));
    assert!(!body.contains("VetX Calcium Plus"));
}

#[tokio::test]
async fn category_filter_narrows_the_catalog() {
    let app = TestApp::new();

    let uri = format!("/?category={}", form_encode("Nutritional Supplements"));
    let response = app.get(&uri).await;
    let body = body_string(response).await;

    assert!(body.contains("VetX Calcium Plus"));
    assert!(body.contains("VetX Vitamin Complex"));
    assert!(!body.contains("VetX Amoxicillin 500mg"));
}

#[tokio::test]
async fn all_category_shows_everything() {
    let app = TestApp::new();

    let response = app.get("/?category=All").await;
    let body = body_string(response).await;

    for name in [
        "VetX Amoxicillin 500mg",
        "VetX Calcium Plus",
        "VetX Wound Heal",
        "VetX Dewormer Pro",
        "VetX Vitamin Complex",
        "VetX Antiseptic Solution",
    ] {
        assert!(body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn grid_fragment_serves_filtered_products_without_page_chrome() {
    let app = TestApp::new();

    let response = app.get("/products/grid?q=wound").await;
    assert_eq!(response.status(), 200);

    let body = body_string(response).await;
    assert!(body.contains("VetX Wound Heal"));
    assert!(body.contains("VetX Antiseptic Solution"));
    assert!(!body.contains("VetX Calcium Plus"));
    // Fragment only, no document shell
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn unmatched_search_shows_empty_state() {
    let app = TestApp::new();

    let response = app.get("/products/grid?q=zzz-no-such-product").await;
    let body = body_string(response).await;

    assert!(body.contains("No products match your search."));
}
