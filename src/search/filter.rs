// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The category-aware grid filter.
//!
//! Distinct from suggestions: the grid shows every match (no cap, no reorder),
//! reacts to the raw query without waiting for the debounce, and additionally
//! searches the rack location so staff can type a shelf code.

use crate::types::{CategorySelection, Product};
use crate::util::normalize::NormalizedQuery;

/// `category_ok && text_ok` for a single product.
///
/// `category_ok`: the selection is "all" or names the product's category
/// exactly (case-sensitive). `text_ok`: the query is empty or is a
/// case-insensitive substring of name, category, description, any tag, or
/// rack location.
pub fn matches(product: &Product, selection: &CategorySelection, query: &NormalizedQuery) -> bool {
    selection.admits(&product.category) && text_matches(product, query)
}

fn text_matches(product: &Product, query: &NormalizedQuery) -> bool {
    if query.is_empty() {
        return true;
    }
    query.is_in(&product.name)
        || query.is_in(&product.category)
        || query.is_in(&product.description)
        || query.is_in_any(product.tags.iter().map(String::as_str))
        || query.is_in(&product.rack_location)
}

/// Every product in `snapshot` that passes [`matches`], in snapshot order.
pub fn filter_grid<'a>(
    snapshot: &'a [Product],
    selection: &CategorySelection,
    query: &NormalizedQuery,
) -> Vec<&'a Product> {
    snapshot
        .iter()
        .filter(|product| matches(product, selection, query))
        .collect()
}

/// Distinct categories in first-seen order, for the category picker.
pub fn categories(snapshot: &[Product]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for product in snapshot {
        if !out.contains(&product.category.as_str()) {
            out.push(&product.category);
        }
    }
    out
}
