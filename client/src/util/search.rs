//! Search-bar matching over the preloaded product list.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::consts::SEARCH_RESULT_LIMIT;
use crate::net::types::Product;

/// True if any searchable field of `product` contains `needle`.
///
/// `needle` must already be lowercase. Id and price match on their plain
/// decimal rendering.
fn matches(product: &Product, needle: &str) -> bool {
    product.id.to_string().contains(needle)
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.sku.to_lowercase().contains(needle)
        || product.price.to_string().contains(needle)
}

/// First `SEARCH_RESULT_LIMIT` products matching `query`, in list order.
/// A blank query matches nothing.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| matches(p, &needle))
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}
