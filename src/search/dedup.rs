// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-safe suggestion deduplication.
//!
//! A product should appear at most once in the suggestion list. The tiers
//! overlap on purpose (an exact category hit is also a category-substring hit
//! and a partial hit), so merging them naively repeats products. Only the first
//! occurrence counts: because tiers are merged in rank order, that is the
//! product's best tier.
//!
//! `SuggestionMerger` keys on the product id and nothing else, and refuses to
//! grow past its limit.
//!
//! **Invariant**: Each product id appears at most once, and the list never
//! exceeds its limit.
//!
//! **Verified by**:
//! - `prop_suggestions_unique_and_bounded` (tests/property/suggestion_props.rs)
//! - `fuzz_targets/suggestion_ranking.rs`

use crate::types::{MatchTier, Product};
use std::collections::HashSet;

/// A product placed in the suggestion list, with the tier that placed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'a> {
    pub product: &'a Product,
    pub tier: MatchTier,
}

/// First-occurrence-wins merger for tiered suggestions.
///
/// # Example
///
/// ```ignore
/// let mut merger = SuggestionMerger::new(10);
/// merger.merge_all(exact.iter().copied(), MatchTier::Exact);
/// merger.merge_all(partial.iter().copied(), MatchTier::Partial);
/// let suggestions = merger.into_vec();
/// ```
pub struct SuggestionMerger<'a> {
    seen: HashSet<&'a str>,
    out: Vec<Suggestion<'a>>,
    limit: usize,
}

impl<'a> SuggestionMerger<'a> {
    pub fn new(limit: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(limit),
            out: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Append `product` unless its id is already present or the list is full.
    ///
    /// Returns `true` if the product was added.
    pub fn merge(&mut self, product: &'a Product, tier: MatchTier) -> bool {
        if self.is_full() {
            return false;
        }
        // Only the id is the key - same name under two ids is two products.
        if !self.seen.insert(product.id.as_str()) {
            return false;
        }
        self.out.push(Suggestion { product, tier });
        true
    }

    /// Merge a whole tier in order. Stops early once full.
    pub fn merge_all(&mut self, products: impl IntoIterator<Item = &'a Product>, tier: MatchTier) {
        for product in products {
            if self.is_full() {
                break;
            }
            self.merge(product, tier);
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.out.len() >= self.limit
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// The merged list, in merge order.
    pub fn into_vec(self) -> Vec<Suggestion<'a>> {
        self.out
    }
}
