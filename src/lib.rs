// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Storefront product search: debounced suggestions, a category-aware grid,
//! keyboard navigation and exact-name resolution.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   list_products()   ┌──────────────────────────────────┐
//! │ ProductStore │────────────────────▶│        SearchController          │
//! │ (store.rs)   │                     │  raw query ──▶ filter (grid)     │
//! └──────────────┘                     │      │                           │
//!                                      │      ▼ Debouncer (timer.rs)      │
//! ┌──────────────┐   schedule/cancel   │  stable query ──▶ rank (suggest) │
//! │ TimerService │◀───────────────────▶│      │                           │
//! │ Virtual/Wall │                     │      ▼ KeyboardNavigator         │
//! └──────────────┘                     └──────────────┬───────────────────┘
//!                                                     │ navigate / not found / reset
//!                                                     ▼
//!                                              ┌─────────────┐
//!                                              │ SearchPort  │
//!                                              └─────────────┘
//! ```
//!
//! | Module             | Role                                              |
//! |--------------------|---------------------------------------------------|
//! | `types`            | Product, tiers, selections, session state         |
//! | `util::normalize`  | Trim + lowercase query form                       |
//! | `timer`            | One-shot cancellable timers, virtual and wall     |
//! | `store`            | Snapshot provider, JSON catalog loading           |
//! | `config`           | Debounce, notice and blur timings                 |
//! | `scoring`          | Popularity order inside a tier                    |
//! | `search`           | Ranker, filter, resolver, navigator, controller   |
//! | `stats`            | Admin summary                                     |
//!
//! # Usage
//!
//! ```
//! use katalog::{InMemoryStore, SearchConfig, SearchController, VirtualClock};
//! use katalog::testing::{make_product, RecordingPort};
//! use katalog::SearchEvent;
//! use std::{rc::Rc, sync::Arc};
//!
//! let store = Arc::new(InMemoryStore::from_products(vec![
//!     make_product("A", "Red Shirt", 5),
//! ]).unwrap());
//! let clock = VirtualClock::new();
//! let port = Rc::new(RecordingPort::default());
//! let mut search = SearchController::new(store, port.clone(), Rc::new(clock.clone()), SearchConfig::default());
//!
//! search.on_input_change("red");
//! clock.advance_ms(400);
//! assert_eq!(search.suggestions()[0].id, "A");
//!
//! search.on_submit("red shirt");
//! assert_eq!(port.events(), vec![SearchEvent::Navigate("A".into())]);
//! ```

pub mod config;
pub mod scoring;
pub mod search;
pub mod stats;
pub mod store;
pub mod testing;
pub mod timer;
pub mod types;
pub mod util;

pub use config::{ConfigError, SearchConfig};
pub use search::{
    categories, filter_grid, matches, matching_tiers, rank_suggestions, rank_suggestions_with_limit,
    resolve_exact, Debouncer, KeyboardNavigator, SearchController, SearchPort, Suggestion,
    SuggestionMerger, MAX_SUGGESTIONS,
};
pub use stats::{BestSeller, CatalogStats};
pub use store::{InMemoryStore, ProductStore, StoreError};
pub use timer::{TimerHandle, TimerService, VirtualClock, WallClock};
pub use types::{
    CategorySelection, MatchTier, NavKey, Product, ProductSnapshot, SearchEvent, SearchState,
    SuggestionItem,
};
pub use util::normalize::{normalize, NormalizedQuery};
