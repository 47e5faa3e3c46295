//! Debounce timing through the controller and on its own.

use super::common::{storefront, Session};
use katalog::{Debouncer, SearchConfig, SearchState, TimerService, VirtualClock};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn burst_emits_last_value_once() {
    let clock = VirtualClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let timers: Rc<dyn TimerService> = Rc::new(clock.clone());
    let mut debouncer = Debouncer::new(timers, move |v: &'static str| sink.borrow_mut().push(v));

    for value in ["k", "ka", "kao", "kaos"] {
        debouncer.feed(value, Duration::from_millis(400));
        clock.advance_ms(100);
    }
    assert!(seen.borrow().is_empty());
    clock.advance_ms(300);
    assert_eq!(*seen.borrow(), vec!["kaos"]);
    assert!(!debouncer.is_pending());
}

#[test]
fn fast_typing_ranks_only_final_text() {
    let mut session = Session::new(storefront());
    session.type_slowly("sepatu", 50);
    assert_eq!(session.search.state(), SearchState::Idle);
    assert_eq!(session.search.stable_query(), "");

    session.clock.advance_ms(400);
    assert_eq!(session.search.stable_query(), "sepatu");
    assert_eq!(session.search.state(), SearchState::Suggesting);
    assert_eq!(session.suggestion_ids()[..2], ["p3", "p4"]);
}

#[test]
fn pauses_longer_than_delay_stabilize_each_prefix() {
    let mut session = Session::new(storefront());
    session.type_slowly("mu", 400);
    assert_eq!(session.search.stable_query(), "mu");
}

#[test]
fn configured_delay_is_used() {
    let config = SearchConfig {
        debounce_ms: 150,
        ..SearchConfig::default()
    };
    let mut session = Session::with_config(storefront(), config);
    session.search.on_input_change("mug");
    session.clock.advance_ms(149);
    assert_eq!(session.search.stable_query(), "");
    session.clock.advance_ms(1);
    assert_eq!(session.search.stable_query(), "mug");
}

#[test]
fn reset_drops_pending_emission() {
    let mut session = Session::new(storefront());
    session.search.on_input_change("mug");
    session.search.on_reset();
    session.clock.advance_ms(1_000);
    assert_eq!(session.search.stable_query(), "");
    assert!(session.search.suggestions().is_empty());
    assert_eq!(session.clock.pending(), 0);
}
