//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::instrument;

use vetx_core::Company;
use vetx_store::query;

use crate::filters;
use crate::state::AppState;
use crate::views::{self, CategoryOption, ProductView};

/// Catalog filter query parameters, shared with the grid fragment.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search over product name and description.
    pub q: Option<String>,
    /// Category selector; absent means the "All" sentinel.
    pub category: Option<String>,
}

impl CatalogQuery {
    #[must_use]
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(query::ALL_CATEGORIES)
    }
}

/// A service highlight on the home page.
pub struct ServiceView {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static service highlights (marketing copy, not store data).
fn services() -> Vec<ServiceView> {
    vec![
        ServiceView {
            title: "Quality Assurance",
            description: "Rigorous testing and quality control for all pharmaceutical products ensuring safety and efficacy",
        },
        ServiceView {
            title: "Reliable Distribution",
            description: "Efficient supply chain ensuring timely delivery across Gujarat with temperature-controlled logistics",
        },
        ServiceView {
            title: "Professional Support",
            description: "Expert guidance and technical support for veterinary professionals and animal care specialists",
        },
        ServiceView {
            title: "24/7 Customer Service",
            description: "Round-the-clock support for urgent veterinary needs and emergency pharmaceutical requirements",
        },
        ServiceView {
            title: "Fast Processing",
            description: "Quick order processing and fulfillment for critical situations and time-sensitive treatments",
        },
        ServiceView {
            title: "Certified Products",
            description: "All products meet international standards and certifications for veterinary pharmaceutical excellence",
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Company profile driving the hero, about, and contact sections.
    pub company: Company,
    /// Products matching the current filter.
    pub products: Vec<ProductView>,
    /// Category options for the filter bar ("All" first).
    pub categories: Vec<CategoryOption>,
    /// Current search term, echoed back into the search box.
    pub search: String,
    /// Currently selected category.
    pub selected_category: String,
    /// Static service highlights.
    pub services: Vec<ServiceView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(filter): Query<CatalogQuery>,
) -> impl IntoResponse {
    let catalog = state.store().products();

    let products = query::filter_catalog(&catalog, filter.search(), filter.category())
        .into_iter()
        .map(ProductView::from)
        .collect();

    HomeTemplate {
        company: state.store().company(),
        products,
        categories: views::category_options(query::category_options(&catalog), filter.category()),
        search: filter.search().to_string(),
        selected_category: filter.category().to_string(),
        services: services(),
    }
}
