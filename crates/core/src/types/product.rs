//! Product entity and its input shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product in the catalog.
///
/// `id` and `created_at` are assigned by the store at creation time and are
/// never overwritten by updates. Everything else is free text the form layer
/// validated before it got here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Currency-agnostic amount; the display layer applies formatting.
    pub price: Decimal,
    pub category: String,
    /// URI reference, not validated for reachability.
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a product: everything except `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
}

/// Partial update for a product.
///
/// `None` fields are left untouched by `update_product`. There is
/// deliberately no way to patch `id` or `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl ProductPatch {
    /// Apply this patch to a product, overwriting only the present fields.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
    }
}

impl From<NewProduct> for ProductPatch {
    /// Treat a full set of fields as a patch (used by the edit form, which
    /// always submits every field).
    fn from(fields: NewProduct) -> Self {
        Self {
            name: Some(fields.name),
            description: Some(fields.description),
            price: Some(fields.price),
            category: Some(fields.category),
            image: Some(fields.image),
        }
    }
}
