// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search session.
//!
//! Products come from the store and are read-only here. Everything else in this
//! file is owned by the search core: the match tier that placed a product in the
//! suggestion list, the projection handed to whoever renders that list, the
//! category the grid is narrowed to, and the session state machine.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Product**: `id` is unique across a snapshot. Deduplication in the ranker
//!   keys on it, so two products sharing an id collapse into one suggestion.
//!
//! - **SuggestionItem**: at most ten per list, ids unique, order is display order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A catalog entry as the store hands it out.
///
/// Only `name`, `category`, `description`, `tags`, `view_count` and
/// `rack_location` take part in search. Price, rating and image ride along for
/// display and the admin summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Free-form labels; order is irrelevant to matching.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Popularity counter used as the tie-breaker inside every tier.
    #[serde(default)]
    pub view_count: u64,
    /// Physical shelf code ("A-12"). Searchable from the grid, never from suggestions.
    #[serde(default)]
    pub rack_location: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Point-in-time copy of the product set.
///
/// Cloning is a reference-count bump. The core reads a fresh one from the store
/// for every ranking, filtering and resolution pass.
pub type ProductSnapshot = Arc<[Product]>;

/// Which bucket put a product into the suggestion list.
///
/// Variant order is rank order: `Exact < Category < Partial < Popular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Name or category equals the query.
    Exact,
    /// Category contains the query.
    Category,
    /// Name, category, description or a tag contains the query.
    Partial,
    /// Backfill by view count; the only tier for an empty query.
    Popular,
}

impl MatchTier {
    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Category => "category",
            MatchTier::Partial => "partial",
            MatchTier::Popular => "popular",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a suggestion-list renderer gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub view_count: u64,
    pub tier: MatchTier,
}

impl SuggestionItem {
    pub fn new(product: &Product, tier: MatchTier) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            view_count: product.view_count,
            tier,
        }
    }
}

/// The category the product grid is narrowed to.
///
/// The storefront uses the literal `"all"` for "no restriction"; `From<&str>`
/// maps it so callers can pass the picker value straight through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    /// Exact, case-sensitive category name.
    Named(String),
}

impl CategorySelection {
    pub const ALL: &'static str = "all";

    /// `true` if a product in `category` belongs to this selection.
    #[inline]
    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Named(name) => name == category,
        }
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        if value == Self::ALL {
            CategorySelection::All
        } else {
            CategorySelection::Named(value.to_string())
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str(Self::ALL),
            CategorySelection::Named(name) => f.write_str(name),
        }
    }
}

/// Search session state. Owned by the controller, nobody else writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SearchState {
    /// No active search, or the last one already resolved.
    #[default]
    Idle,
    /// Suggestion list is live; nothing submitted yet.
    Suggesting,
    /// Last submission matched no product; the notice is on screen.
    NotFound,
}

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
}

/// Outgoing events, as recorded by [`crate::testing::RecordingPort`] and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Navigate(String),
    NotFound,
    Reset,
    NoticeDismissed,
}
