// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-name resolution, shared by submit and the `resolve` command.

use crate::types::Product;
use crate::util::normalize::NormalizedQuery;

/// First product in snapshot order whose name equals `query`, ignoring case
/// and surrounding whitespace. The empty query resolves to nothing.
pub fn resolve_exact<'a>(snapshot: &'a [Product], query: &NormalizedQuery) -> Option<&'a Product> {
    if query.is_empty() {
        return None;
    }
    snapshot.iter().find(|product| query.equals(&product.name))
}
