//! Product grid fragment handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use vetx_store::query;

use crate::state::AppState;
use crate::views::ProductView;

use super::home::CatalogQuery;

/// Product grid fragment template (for HTMX live search).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductView>,
}

/// Display the filtered product grid fragment.
pub async fn grid(
    State(state): State<AppState>,
    Query(filter): Query<CatalogQuery>,
) -> impl IntoResponse {
    let catalog = state.store().products();

    let products = query::filter_catalog(&catalog, filter.search(), filter.category())
        .into_iter()
        .map(ProductView::from)
        .collect();

    ProductGridTemplate { products }
}
