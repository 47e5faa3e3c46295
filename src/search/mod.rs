// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where keystrokes turn into products.
//!
//! Two consumers read the same catalog differently. The suggestion list waits
//! for the debounce, ranks by tier (exact, category, partial, then popular
//! backfill) and caps at ten.
//! The grid reacts to every keystroke, keeps snapshot order and shows all
//! matches. The controller owns the session and decides which one runs when.

pub mod controller;
pub mod debounce;
pub mod dedup;
pub mod filter;
pub mod navigator;
pub mod resolve;
pub mod suggest;

pub use controller::{SearchController, SearchPort};
pub use debounce::Debouncer;
pub use dedup::{Suggestion, SuggestionMerger};
pub use filter::{categories, filter_grid, matches};
pub use navigator::KeyboardNavigator;
pub use resolve::resolve_exact;
pub use suggest::{matching_tiers, rank_suggestions, rank_suggestions_with_limit, MAX_SUGGESTIONS};
