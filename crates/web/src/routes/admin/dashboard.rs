//! Admin dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use rust_decimal::Decimal;

use vetx_core::Product;
use vetx_store::query;

use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::home::CatalogQuery;
use crate::state::AppState;
use crate::views::{self, CategoryOption, ProductView, format_price};

/// Headline numbers for the dashboard.
pub struct DashboardStats {
    pub total_products: usize,
    pub category_count: usize,
    pub average_price: String,
    pub total_value: String,
}

impl DashboardStats {
    fn compute(catalog: &[Product]) -> Self {
        let total: Decimal = catalog.iter().map(|p| p.price).sum();
        let average = if catalog.is_empty() {
            Decimal::ZERO
        } else {
            (total / Decimal::from(catalog.len())).round()
        };

        Self {
            total_products: catalog.len(),
            category_count: query::category_options(catalog).len().saturating_sub(1),
            average_price: format_price(average),
            total_value: format_price(total),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub stats: DashboardStats,
    pub products: Vec<ProductView>,
    pub categories: Vec<CategoryOption>,
    pub search: String,
}

/// Display the admin dashboard.
///
/// GET /admin
pub async fn dashboard(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Query(filter): Query<CatalogQuery>,
) -> impl IntoResponse {
    let catalog = state.store().products();

    let products = query::filter_catalog(&catalog, filter.search(), filter.category())
        .into_iter()
        .map(ProductView::from)
        .collect();

    DashboardTemplate {
        stats: DashboardStats::compute(&catalog),
        products,
        categories: views::category_options(query::category_options(&catalog), filter.category()),
        search: filter.search().to_string(),
    }
}
