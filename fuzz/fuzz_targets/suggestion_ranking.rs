// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tiered suggestion ranking.
//!
//! Tier MUST dominate view count. An exact hit with zero views beats a partial
//! hit with a million. This target builds arbitrary catalogs and queries and
//! checks the ordering, the cap and id uniqueness survive whatever it finds.

#![no_main]

use arbitrary::Arbitrary;
use katalog::testing::make_product_full;
use katalog::{matching_tiers, rank_suggestions, MatchTier, NormalizedQuery, Product};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
struct FuzzProduct {
    name: String,
    category: String,
    description: String,
    tags: Vec<String>,
    views: u64,
}

#[derive(Arbitrary, Debug)]
struct Input {
    products: Vec<FuzzProduct>,
    query: String,
}

fuzz_target!(|input: Input| {
    let catalog: Vec<Product> = input
        .products
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, p)| {
            let tags: Vec<&str> = p.tags.iter().take(8).map(String::as_str).collect();
            make_product_full(&format!("p{}", i), &p.name, &p.category, &p.description, &tags, p.views)
        })
        .collect();

    let query = NormalizedQuery::new(&input.query);
    let out = rank_suggestions(&catalog, &query);

    // INVARIANT 1: bounded, and full whenever the catalog allows
    assert_eq!(out.len(), catalog.len().min(10));

    // INVARIANT 2: ids unique
    let mut seen = HashSet::new();
    for s in &out {
        assert!(seen.insert(s.product.id.as_str()), "duplicate {}", s.product.id);
    }

    // INVARIANT 3: tier order, then views descending
    for pair in out.windows(2) {
        assert!(pair[0].tier <= pair[1].tier, "tier order broken: {:?}", pair);
        if pair[0].tier == pair[1].tier {
            assert!(pair[0].product.view_count >= pair[1].product.view_count);
        }
    }

    // INVARIANT 4: each product reports its best tier
    if !query.is_empty() {
        for s in &out {
            let best = matching_tiers(s.product, &query)
                .into_iter()
                .min()
                .unwrap_or(MatchTier::Popular);
            assert_eq!(s.tier, best);
        }
    }
});
