// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tiered suggestion ranker: exact → category → partial → popular.
//!
//! Tier 1 (exact) catches the user who typed a full product or category name.
//! Tier 2 (category) widens to every product whose category contains the query,
//! so "sepa" surfaces the whole "Sepatu" shelf ahead of stray description hits.
//! Tier 3 (partial) is the catch-all: name, category, description or any tag.
//! Tier 4 (popular) backfills whatever room is left with the most viewed
//! products, so the list is never empty while the catalog isn't.
//!
//! The tiers overlap. Each is stably sorted by view count, they are
//! concatenated in tier order, and the merger keeps the first occurrence of
//! each product id, so a product always sits in its best tier. The empty query
//! has a single bucket: the most viewed products.
//!
//! Pure and total. An empty snapshot yields an empty list, never an error.

use crate::scoring::sort_by_popularity;
use crate::search::dedup::{Suggestion, SuggestionMerger};
use crate::types::{MatchTier, Product};
use crate::util::normalize::NormalizedQuery;

/// Upper bound on suggestion-list length.
pub const MAX_SUGGESTIONS: usize = 10;

/// Rank `snapshot` for `query`, returning at most [`MAX_SUGGESTIONS`] entries.
pub fn rank_suggestions<'a>(snapshot: &'a [Product], query: &NormalizedQuery) -> Vec<Suggestion<'a>> {
    rank_suggestions_with_limit(snapshot, query, MAX_SUGGESTIONS)
}

/// Like [`rank_suggestions`] with a smaller cap. Limits above
/// [`MAX_SUGGESTIONS`] are clamped to it.
pub fn rank_suggestions_with_limit<'a>(
    snapshot: &'a [Product],
    query: &NormalizedQuery,
    limit: usize,
) -> Vec<Suggestion<'a>> {
    let limit = limit.min(MAX_SUGGESTIONS);
    let mut merger = SuggestionMerger::new(limit);

    let tiers: &[MatchTier] = if query.is_empty() {
        &[MatchTier::Popular]
    } else {
        &[MatchTier::Exact, MatchTier::Category, MatchTier::Partial, MatchTier::Popular]
    };

    for &tier in tiers {
        if merger.is_full() {
            break;
        }
        merger.merge_all(bucket(snapshot, query, tier), tier);
    }

    merger.into_vec()
}

/// Which text tiers `product` qualifies for, independent of deduplication.
///
/// Popular is left out: every product qualifies for it.
pub fn matching_tiers(product: &Product, query: &NormalizedQuery) -> Vec<MatchTier> {
    [MatchTier::Exact, MatchTier::Category, MatchTier::Partial]
        .into_iter()
        .filter(|tier| in_tier(product, query, *tier))
        .collect()
}

/// One tier's candidates, stably sorted by popularity.
fn bucket<'a>(snapshot: &'a [Product], query: &NormalizedQuery, tier: MatchTier) -> Vec<&'a Product> {
    let mut hits: Vec<&Product> = snapshot
        .iter()
        .filter(|product| in_tier(product, query, tier))
        .collect();
    sort_by_popularity(&mut hits);
    hits
}

#[inline]
fn in_tier(product: &Product, query: &NormalizedQuery, tier: MatchTier) -> bool {
    match tier {
        MatchTier::Exact => query.equals(&product.name) || query.equals(&product.category),
        MatchTier::Category => query.is_in(&product.category),
        MatchTier::Partial => {
            query.is_in(&product.name)
                || query.is_in(&product.category)
                || query.is_in(&product.description)
                || query.is_in_any(product.tags.iter().map(String::as_str))
        }
        MatchTier::Popular => true,
    }
}
