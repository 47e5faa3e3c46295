// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::search::controller::SearchPort;
use crate::types::{Product, SearchEvent};
use std::cell::RefCell;

/// Create a minimal product in category "Test".
///
/// This is the canonical implementation used across all tests.
pub fn make_product(id: &str, name: &str, view_count: u64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: "Test".to_string(),
        description: String::new(),
        tags: vec![],
        view_count,
        rack_location: String::new(),
        price: 0.0,
        rating: 0.0,
        image: String::new(),
        created_at: None,
    }
}

/// Create a product with every searchable field set.
pub fn make_product_full(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    tags: &[&str],
    view_count: u64,
) -> Product {
    Product {
        category: category.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_product(id, name, view_count)
    }
}

/// Create a product with price and rating, for the admin summary.
pub fn make_priced_product(id: &str, name: &str, price: f64, rating: f64, view_count: u64) -> Product {
    Product {
        price,
        rating,
        ..make_product(id, name, view_count)
    }
}

/// A [`SearchPort`] that remembers every event in arrival order.
#[derive(Debug, Default)]
pub struct RecordingPort {
    events: RefCell<Vec<SearchEvent>>,
}

impl RecordingPort {
    pub fn events(&self) -> Vec<SearchEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SearchPort for RecordingPort {
    fn on_navigate(&self, product_id: &str) {
        self.events
            .borrow_mut()
            .push(SearchEvent::Navigate(product_id.to_string()));
    }

    fn on_not_found(&self) {
        self.events.borrow_mut().push(SearchEvent::NotFound);
    }

    fn on_reset(&self) {
        self.events.borrow_mut().push(SearchEvent::Reset);
    }

    fn on_notice_dismissed(&self) {
        self.events.borrow_mut().push(SearchEvent::NoticeDismissed);
    }
}
