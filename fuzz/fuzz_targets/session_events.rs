// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search controller under arbitrary UI event streams.
//!
//! No event sequence may panic (including a `RefCell` double borrow from a
//! timer callback), leave timers behind after the session ends, or push the
//! suggestion list or highlight out of bounds.

#![no_main]

use arbitrary::Arbitrary;
use katalog::testing::{make_product, RecordingPort};
use katalog::{InMemoryStore, NavKey, SearchConfig, SearchController, VirtualClock};
use libfuzzer_sys::fuzz_target;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
enum Event {
    Input(String),
    Down,
    Up,
    Enter,
    Hover(u8),
    Click(u8),
    Focus,
    Blur,
    Wait(u16),
    Reset,
    Category(bool),
}

fuzz_target!(|events: Vec<Event>| {
    let store = InMemoryStore::from_products(vec![
        make_product("A", "Red Shirt", 5),
        make_product("B", "Blue Shirt", 10),
        make_product("C", "Green Hat", 0),
    ]);
    let Ok(store) = store else { return };

    let clock = VirtualClock::new();
    let mut search = SearchController::new(
        Arc::new(store),
        Rc::new(RecordingPort::default()),
        Rc::new(clock.clone()),
        SearchConfig::default(),
    );

    for event in events.into_iter().take(256) {
        match event {
            Event::Input(text) => search.on_input_change(&text),
            Event::Down => search.on_key(NavKey::ArrowDown),
            Event::Up => search.on_key(NavKey::ArrowUp),
            Event::Enter => search.on_key(NavKey::Enter),
            Event::Hover(i) => search.on_hover(i as usize),
            Event::Click(i) => search.on_suggestion_click(i as usize),
            Event::Focus => search.on_focus(),
            Event::Blur => search.on_blur(),
            Event::Wait(ms) => {
                clock.advance_ms(u64::from(ms));
            }
            Event::Reset => search.on_reset(),
            Event::Category(all) => {
                search.select_category(if all { "all".into() } else { "Test".into() })
            }
        }

        let n = search.suggestions().len();
        assert!(n <= 10);
        let index = search.highlight_index();
        assert!(index >= -1 && index < n as i64);
    }

    search.end_session();
    assert_eq!(clock.pending(), 0);
});
