//! Pure, derived catalog queries.
//!
//! Nothing here holds state or has side effects; both the public product
//! grid and the admin dashboard recompute these on every request.

use vetx_core::Product;

/// Sentinel category meaning "no category filter".
///
/// Matched case-insensitively, so both `All` (public grid) and `all`
/// (dashboard) select every category.
pub const ALL_CATEGORIES: &str = "All";

/// Returns true when `category` is the [`ALL_CATEGORIES`] sentinel.
#[must_use]
pub fn is_all_categories(category: &str) -> bool {
    category.eq_ignore_ascii_case(ALL_CATEGORIES)
}

/// Filter the catalog by free-text search and category.
///
/// A product matches when `search` is a case-insensitive substring of its
/// name or description, and its category equals `category` exactly (unless
/// the sentinel is selected). An empty search matches everything. Catalog
/// order is preserved.
#[must_use]
pub fn filter_catalog<'a>(catalog: &'a [Product], search: &str, category: &str) -> Vec<&'a Product> {
    let needle = search.to_lowercase();

    catalog
        .iter()
        .filter(|product| {
            let matches_search = needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            let matches_category =
                is_all_categories(category) || product.category == category;
            matches_search && matches_category
        })
        .collect()
}

/// The category options to offer the user: the sentinel followed by every
/// distinct category currently in the catalog, in first-seen order.
#[must_use]
pub fn category_options(catalog: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for product in catalog {
        if !options.contains(&product.category) {
            options.push(product.category.clone());
        }
    }
    options
}
