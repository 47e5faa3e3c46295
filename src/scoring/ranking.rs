// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion ordering: tier first, popularity second.
//!
//! The ranking is bucketed by match tier, not by a composite score. An exact
//! match with 5 views beats a partial match with 10,000. View counts only order
//! products within the same tier, and equal counts keep snapshot order because
//! every sort here is stable.
//!
//! Bucket hierarchy: Exact > Category > Partial > Popular

use crate::types::Product;
use std::cmp::Ordering;

/// Popularity order: higher `view_count` first.
///
/// Use with a stable sort (`sort_by`) so ties keep their input order.
#[inline]
pub fn by_view_count_desc(a: &Product, b: &Product) -> Ordering {
    b.view_count.cmp(&a.view_count)
}

/// Stable-sort a bucket of products by popularity.
pub fn sort_by_popularity(bucket: &mut [&Product]) {
    bucket.sort_by(|a, b| by_view_count_desc(a, b));
}
