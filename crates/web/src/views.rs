//! Display data for templates.
//!
//! Templates only ever see preformatted strings; all formatting decisions
//! (currency symbol, date shape) live here.

use rust_decimal::Decimal;

use vetx_core::Product;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub added_on: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(product.price),
            category: product.category.clone(),
            image: product.image.clone(),
            added_on: product.created_at.format("%b %d, %Y").to_string(),
        }
    }
}

/// Format an amount as a display price (e.g., "₹120").
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("₹{}", amount.normalize())
}

/// A category choice in a filter bar or form dropdown.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// Mark the option matching `selected`, leaving the rest unmarked.
#[must_use]
pub fn category_options(names: Vec<String>, selected: &str) -> Vec<CategoryOption> {
    names
        .into_iter()
        .map(|name| CategoryOption {
            selected: name == selected,
            name,
        })
        .collect()
}
