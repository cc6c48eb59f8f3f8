//! Product management route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use vetx_core::{Product, ProductId};
use vetx_store::seed;

use crate::error::{AppError, Result};
use crate::filters;
use crate::forms::ProductForm;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;
use crate::views::{self, CategoryOption};

/// Product form template, shared by the create and edit pages.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub heading: String,
    /// Where the form posts to.
    pub action: String,
    pub values: ProductForm,
    pub errors: Vec<String>,
    pub categories: Vec<CategoryOption>,
}

impl ProductFormTemplate {
    fn create(values: ProductForm, errors: Vec<String>) -> Self {
        Self {
            heading: "Add Product".to_string(),
            action: "/admin/products".to_string(),
            categories: form_categories(&values.category),
            values,
            errors,
        }
    }

    fn edit(id: &ProductId, values: ProductForm, errors: Vec<String>) -> Self {
        Self {
            heading: "Edit Product".to_string(),
            action: format!("/admin/products/{id}"),
            categories: form_categories(&values.category),
            values,
            errors,
        }
    }
}

fn form_categories(selected: &str) -> Vec<CategoryOption> {
    let names = seed::FORM_CATEGORIES
        .iter()
        .map(ToString::to_string)
        .collect();
    views::category_options(names, selected)
}

fn find_product(state: &AppState, id: &ProductId) -> Result<Product> {
    state
        .store()
        .products()
        .into_iter()
        .find(|p| &p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Render the new product form.
///
/// GET /admin/products/new
pub async fn new_form(_auth: RequireAdminAuth) -> impl IntoResponse {
    ProductFormTemplate::create(ProductForm::default(), Vec::new())
}

/// Create a product.
///
/// POST /admin/products
///
/// Validation failures re-render the form with the submitted values and
/// every field error; the store is only called with clean input.
pub async fn create(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Response {
    match form.validate() {
        Ok(fields) => {
            let product = state.store().add_product(fields);
            tracing::info!(id = %product.id, "product created");
            Redirect::to("/admin").into_response()
        }
        Err(errors) => ProductFormTemplate::create(form, errors).into_response(),
    }
}

/// Render the edit form for an existing product.
///
/// GET /admin/products/{id}/edit
pub async fn edit_form(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = ProductId::from(id);
    let product = find_product(&state, &id)?;

    Ok(ProductFormTemplate::edit(
        &id,
        ProductForm::from_product(&product),
        Vec::new(),
    ))
}

/// Update an existing product.
///
/// POST /admin/products/{id}
///
/// The edit form always submits every field, so a valid submission patches
/// them all. An unknown id is a 404, never a silent no-op.
pub async fn update(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let id = ProductId::from(id);

    match form.validate() {
        Ok(fields) => {
            state.store().update_product(&id, fields.into())?;
            tracing::info!(id = %id, "product updated");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(errors) => Ok(ProductFormTemplate::edit(&id, form, errors).into_response()),
    }
}

/// Delete a product.
///
/// POST /admin/products/{id}/delete
pub async fn delete(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = ProductId::from(id);
    state.store().delete_product(&id)?;
    tracing::info!(id = %id, "product deleted");
    Ok(Redirect::to("/admin"))
}
