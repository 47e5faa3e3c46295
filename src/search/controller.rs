// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search session: keystrokes in, navigation or "not found" out.
//!
//! `SearchController` ties the pieces together. The raw query updates on every
//! keystroke and drives the grid immediately. The debouncer stabilizes it, and
//! each stabilized value is ranked against a fresh snapshot from the store.
//! Submission resolves by exact (case-insensitive) product name.
//!
//! ```text
//!              input                 debounce fires
//!   Idle ─────────────────▶ (Idle) ─────────────────▶ Suggesting
//!    ▲                                                     │
//!    │ found / reset / notice expires                      │ submit
//!    │                                                     ▼
//!    └────────────────────────────────────────── NotFound ◀┘ (no match)
//! ```
//!
//! # Timers and ownership
//!
//! Session state lives behind `Rc`; every timer callback holds a `Weak` and
//! does nothing once the controller is gone. Dropping the controller also
//! cancels every pending timer, so nothing is left in the timer service.
//!
//! Port events are dispatched after the session borrow is released, so a port
//! implementation may call straight back into the controller.
//!
//! # Enter and the highlight
//!
//! Enter submits the text currently in the search box, not the highlighted
//! suggestion. Arrowing down to "Blue Shirt" and pressing Enter with "shi" typed
//! resolves "shi". Clicking a suggestion is different: the click copies the
//! suggestion's name into the box first.

use crate::config::SearchConfig;
use crate::search::debounce::Debouncer;
use crate::search::filter::filter_grid;
use crate::search::navigator::KeyboardNavigator;
use crate::search::resolve::resolve_exact;
use crate::search::suggest::rank_suggestions_with_limit;
use crate::store::ProductStore;
use crate::timer::{TimerHandle, TimerService};
use crate::types::{CategorySelection, NavKey, Product, SearchState, SuggestionItem};
use crate::util::normalize::NormalizedQuery;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;

/// Where the controller's decisions go.
///
/// The storefront wires these to routing and the notice banner; tests record
/// them.
pub trait SearchPort {
    /// Show the detail view for `product_id`.
    fn on_navigate(&self, product_id: &str);
    /// Show the transient "not found" notice.
    fn on_not_found(&self);
    /// Clear the search UI and show the full grid.
    fn on_reset(&self);
    /// The notice window ran out and the session is back to idle.
    fn on_notice_dismissed(&self) {}
}

#[derive(Debug, Default)]
struct Session {
    raw_query: String,
    stable_query: String,
    suggestions: Vec<SuggestionItem>,
    navigator: KeyboardNavigator,
    state: SearchState,
    visible: bool,
    category: CategorySelection,
}

/// Everything a timer callback may need to reach.
struct Shared<S> {
    session: RefCell<Session>,
    store: Arc<S>,
    port: Rc<dyn SearchPort>,
    config: SearchConfig,
    notice_timer: Cell<Option<TimerHandle>>,
    blur_timer: Cell<Option<TimerHandle>>,
}

impl<S: ProductStore> Shared<S> {
    /// Rank `raw` against the latest snapshot and store it as the stable query.
    fn stabilize(&self, raw: String) {
        let snapshot = self.store.list_products();
        let query = NormalizedQuery::new(&raw);
        let items: Vec<SuggestionItem> =
            rank_suggestions_with_limit(&snapshot, &query, self.config.suggestion_limit)
                .into_iter()
                .map(|s| SuggestionItem::new(s.product, s.tier))
                .collect();

        let mut session = self.session.borrow_mut();
        session.navigator.clamp(items.len());
        session.suggestions = items;
        session.stable_query = raw;
    }

    /// Debounce emission: re-rank and open the list.
    fn on_stable(&self, raw: String) {
        self.stabilize(raw);
        let mut session = self.session.borrow_mut();
        // An active notice is not cleared by typing; it runs out on its own.
        if session.state == SearchState::Idle {
            session.state = SearchState::Suggesting;
        }
        tracing::debug!(
            query = %session.stable_query,
            suggestions = session.suggestions.len(),
            state = ?session.state,
            "query stabilized"
        );
    }

    fn on_notice_expired(&self) {
        self.notice_timer.set(None);
        let dismissed = {
            let mut session = self.session.borrow_mut();
            if session.state == SearchState::NotFound {
                session.state = SearchState::Idle;
                true
            } else {
                false
            }
        };
        if dismissed {
            tracing::debug!("not-found notice expired");
            self.port.on_notice_dismissed();
        }
    }

    fn on_blur_expired(&self) {
        self.blur_timer.set(None);
        self.session.borrow_mut().visible = false;
    }
}

/// One user's search session.
///
/// Single-threaded; create one per session and drop it when the session ends.
pub struct SearchController<S: ProductStore + 'static> {
    shared: Rc<Shared<S>>,
    timers: Rc<dyn TimerService>,
    debouncer: Debouncer<String>,
}

impl<S: ProductStore + 'static> SearchController<S> {
    pub fn new(
        store: Arc<S>,
        port: Rc<dyn SearchPort>,
        timers: Rc<dyn TimerService>,
        config: SearchConfig,
    ) -> Self {
        let shared = Rc::new(Shared {
            session: RefCell::new(Session::default()),
            store,
            port,
            config,
            notice_timer: Cell::new(None),
            blur_timer: Cell::new(None),
        });

        let weak = Rc::downgrade(&shared);
        let debouncer = Debouncer::new(Rc::clone(&timers), move |raw: String| {
            if let Some(shared) = weak.upgrade() {
                shared.on_stable(raw);
            }
        });

        Self {
            shared,
            timers,
            debouncer,
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// A keystroke changed the search box to `raw`.
    pub fn on_input_change(&mut self, raw: &str) {
        self.cancel_timer(&self.shared.blur_timer);
        {
            let mut session = self.shared.session.borrow_mut();
            session.raw_query = raw.to_string();
            session.visible = true;
        }
        self.debouncer
            .feed(raw.to_string(), self.shared.config.debounce());
    }

    pub fn on_key(&mut self, key: NavKey) {
        match key {
            NavKey::ArrowDown | NavKey::ArrowUp => {
                let mut session = self.shared.session.borrow_mut();
                let n = session.suggestions.len();
                let visible = session.visible;
                if key == NavKey::ArrowDown {
                    session.navigator.arrow_down(n, visible);
                } else {
                    session.navigator.arrow_up(n, visible);
                }
            }
            NavKey::Enter => {
                // The live text, not the highlighted suggestion.
                let query = self.shared.session.borrow().raw_query.clone();
                self.on_submit(&query);
            }
        }
    }

    pub fn on_hover(&mut self, index: usize) {
        let mut session = self.shared.session.borrow_mut();
        let n = session.suggestions.len();
        session.navigator.hover(index, n);
    }

    /// Click on suggestion `index`: copy its name into the box and submit.
    pub fn on_suggestion_click(&mut self, index: usize) {
        let name = {
            let session = self.shared.session.borrow();
            match session.suggestions.get(index) {
                Some(item) => item.name.clone(),
                None => return,
            }
        };
        self.shared.session.borrow_mut().raw_query = name.clone();
        self.on_submit(&name);
    }

    pub fn on_focus(&mut self) {
        self.cancel_timer(&self.shared.blur_timer);
        self.shared.session.borrow_mut().visible = true;
    }

    /// Hide the list after the blur grace period, so a click can still land.
    pub fn on_blur(&mut self) {
        self.cancel_timer(&self.shared.blur_timer);
        let weak = Rc::downgrade(&self.shared);
        let handle = self.timers.schedule(
            self.shared.config.blur_hide(),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_blur_expired();
                }
            }),
        );
        self.shared.blur_timer.set(Some(handle));
    }

    pub fn select_category(&mut self, selection: CategorySelection) {
        tracing::debug!(category = %selection, "category selected");
        self.shared.session.borrow_mut().category = selection;
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolve `query` to a product by exact name, or signal "not found".
    ///
    /// Empty and whitespace-only queries are ignored.
    pub fn on_submit(&mut self, query: &str) {
        let normalized = NormalizedQuery::new(query);
        if normalized.is_empty() {
            return;
        }

        // Stabilize now so a stale debounce can't reopen the list later.
        self.debouncer.cancel();
        self.shared.stabilize(query.to_string());

        let snapshot = self.shared.store.list_products();
        let found = resolve_exact(&snapshot, &normalized).map(|product| product.id.clone());

        {
            let mut session = self.shared.session.borrow_mut();
            session.raw_query = query.to_string();
            session.visible = false;
            session.state = if found.is_some() {
                SearchState::Idle
            } else {
                SearchState::NotFound
            };
        }

        match found {
            Some(id) => {
                self.cancel_timer(&self.shared.notice_timer);
                tracing::debug!(query = %normalized, product_id = %id, "query resolved");
                self.shared.port.on_navigate(&id);
            }
            None => {
                self.restart_notice();
                tracing::debug!(query = %normalized, "query matched no product");
                self.shared.port.on_not_found();
            }
        }
    }

    /// Clear everything and return to the full grid.
    pub fn on_reset(&mut self) {
        self.debouncer.cancel();
        self.cancel_timer(&self.shared.notice_timer);
        self.cancel_timer(&self.shared.blur_timer);
        *self.shared.session.borrow_mut() = Session::default();
        tracing::debug!("search reset");
        self.shared.port.on_reset();
    }

    /// End the session. Equivalent to dropping the controller.
    pub fn end_session(self) {}

    fn restart_notice(&self) {
        self.cancel_timer(&self.shared.notice_timer);
        let weak = Rc::downgrade(&self.shared);
        let handle = self.timers.schedule(
            self.shared.config.notice(),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_notice_expired();
                }
            }),
        );
        self.shared.notice_timer.set(Some(handle));
    }

    fn cancel_timer(&self, slot: &Cell<Option<TimerHandle>>) {
        if let Some(handle) = slot.take() {
            self.timers.cancel(handle);
        }
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn state(&self) -> SearchState {
        self.shared.session.borrow().state
    }

    pub fn raw_query(&self) -> String {
        self.shared.session.borrow().raw_query.clone()
    }

    /// The last debounced (or submitted) query text.
    pub fn stable_query(&self) -> String {
        self.shared.session.borrow().stable_query.clone()
    }

    pub fn suggestions(&self) -> Vec<SuggestionItem> {
        self.shared.session.borrow().suggestions.clone()
    }

    pub fn highlight(&self) -> Option<usize> {
        self.shared.session.borrow().navigator.highlight()
    }

    /// `-1` when nothing is highlighted.
    pub fn highlight_index(&self) -> i64 {
        self.shared.session.borrow().navigator.index()
    }

    pub fn highlighted(&self) -> Option<SuggestionItem> {
        let session = self.shared.session.borrow();
        session
            .navigator
            .highlight()
            .and_then(|i| session.suggestions.get(i).cloned())
    }

    /// The list is shown only when it is open and has something in it.
    pub fn suggestions_visible(&self) -> bool {
        let session = self.shared.session.borrow();
        session.visible && !session.suggestions.is_empty()
    }

    pub fn category(&self) -> CategorySelection {
        self.shared.session.borrow().category.clone()
    }

    /// The product grid for the raw query and selected category, read from
    /// the latest snapshot.
    pub fn grid(&self) -> Vec<Product> {
        let (query, category) = {
            let session = self.shared.session.borrow();
            (NormalizedQuery::new(&session.raw_query), session.category.clone())
        };
        let snapshot = self.shared.store.list_products();
        filter_grid(&snapshot, &category, &query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.shared.config
    }
}

impl<S: ProductStore + 'static> Drop for SearchController<S> {
    fn drop(&mut self) {
        self.debouncer.cancel();
        self.cancel_timer(&self.shared.notice_timer);
        self.cancel_timer(&self.shared.blur_timer);
    }
}
