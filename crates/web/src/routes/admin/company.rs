//! Company profile route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::filters;
use crate::forms::CompanyForm;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Company profile form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/company_form.html")]
pub struct CompanyFormTemplate {
    pub values: CompanyForm,
    pub errors: Vec<String>,
    /// Set after a successful save; the page stays put and confirms.
    pub saved: bool,
}

/// Render the company profile form, prefilled from the current record.
///
/// GET /admin/company
pub async fn form(_auth: RequireAdminAuth, State(state): State<AppState>) -> impl IntoResponse {
    CompanyFormTemplate {
        values: CompanyForm::from_company(&state.store().company()),
        errors: Vec::new(),
        saved: false,
    }
}

/// Update the company profile.
///
/// POST /admin/company
pub async fn update(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<CompanyForm>,
) -> impl IntoResponse {
    match form.validate() {
        Ok(patch) => {
            state.store().update_company(patch);
            tracing::info!("company profile updated");
            CompanyFormTemplate {
                values: CompanyForm::from_company(&state.store().company()),
                errors: Vec::new(),
                saved: true,
            }
        }
        Err(errors) => CompanyFormTemplate {
            values: form,
            errors,
            saved: false,
        },
    }
}
