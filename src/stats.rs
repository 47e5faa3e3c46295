// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Admin summary of a catalog snapshot.

use crate::types::Product;
use serde::Serialize;

/// The numbers on the admin dashboard.
///
/// Averages are `0.0` for an empty catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub avg_price: f64,
    pub avg_rating: f64,
    pub total_views: u64,
    /// Most viewed product; the earliest one wins a tie.
    pub best_seller: Option<BestSeller>,
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSeller {
    pub id: String,
    pub name: String,
    pub category: String,
    pub view_count: u64,
}

impl CatalogStats {
    pub fn from_products(products: &[Product]) -> Self {
        let total_products = products.len();
        let (avg_price, avg_rating) = if total_products == 0 {
            (0.0, 0.0)
        } else {
            let n = total_products as f64;
            (
                products.iter().map(|p| p.price).sum::<f64>() / n,
                products.iter().map(|p| p.rating).sum::<f64>() / n,
            )
        };

        let total_views = products
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.view_count));

        // Strictly greater, so the first of equally viewed products stays.
        let best_seller = products
            .iter()
            .fold(None::<&Product>, |best, p| match best {
                Some(b) if p.view_count <= b.view_count => Some(b),
                _ => Some(p),
            })
            .map(|p| BestSeller {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                view_count: p.view_count,
            });

        Self {
            total_products,
            avg_price,
            avg_rating,
            total_views,
            best_seller,
            categories: crate::search::filter::categories(products).len(),
        }
    }
}
