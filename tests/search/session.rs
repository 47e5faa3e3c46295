//! Session lifecycle: notice window, blur, reset and teardown.

use super::common::{shirts, storefront, RecordingPort, Session};
use katalog::{
    InMemoryStore, SearchConfig, SearchController, SearchEvent, SearchPort, SearchState,
    VirtualClock,
};
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn found_after_not_found_cancels_notice() {
    let mut session = Session::new(shirts());
    session.search.on_submit("Green Hat");
    session.search.on_submit("red shirt");
    assert_eq!(session.search.state(), SearchState::Idle);
    assert_eq!(session.clock.pending(), 0);

    session.clock.advance_ms(5_000);
    assert_eq!(
        session.port.events(),
        vec![SearchEvent::NotFound, SearchEvent::Navigate("A".into())]
    );
}

#[test]
fn whitespace_submit_is_ignored() {
    let mut session = Session::new(shirts());
    session.search.on_submit("   ");
    assert!(session.port.events().is_empty());
    assert_eq!(session.search.state(), SearchState::Idle);
}

#[test]
fn submit_uses_latest_snapshot() {
    let mut session = Session::new(shirts());
    session.store.replace(storefront()).unwrap();
    session.search.on_submit("Blue Shirt");
    assert_eq!(session.port.events(), vec![SearchEvent::NotFound]);
    session.search.on_submit("mug keramik");
    assert_eq!(session.port.events().last(), Some(&SearchEvent::Navigate("p7".into())));
}

#[test]
fn empty_store_never_matches() {
    let mut session = Session::new(Vec::new());
    session.search.on_input_change("kaos");
    session.clock.advance_ms(400);
    assert!(session.search.suggestions().is_empty());
    assert!(!session.search.suggestions_visible());
    session.search.on_submit("kaos");
    assert_eq!(session.search.state(), SearchState::NotFound);
}

#[test]
fn blur_hides_after_grace_unless_refocused() {
    let mut session = Session::new(storefront());
    session.search.on_input_change("kaos");
    session.clock.advance_ms(400);
    assert!(session.search.suggestions_visible());

    session.search.on_blur();
    session.clock.advance_ms(149);
    assert!(session.search.suggestions_visible());
    session.clock.advance_ms(1);
    assert!(!session.search.suggestions_visible());

    session.search.on_focus();
    assert!(session.search.suggestions_visible());
}

#[test]
fn input_after_blur_keeps_list_open() {
    let mut session = Session::new(storefront());
    session.search.on_input_change("kaos");
    session.clock.advance_ms(400);
    session.search.on_blur();
    session.search.on_input_change("kaos p");
    session.clock.advance_ms(400);
    assert!(session.search.suggestions_visible());
}

#[test]
fn reset_emits_and_returns_to_full_grid() {
    let mut session = Session::new(storefront());
    session.search.select_category("Sepatu".into());
    session.search.on_input_change("lari");
    assert_eq!(session.search.grid().len(), 1);

    session.search.on_reset();
    assert_eq!(session.search.grid().len(), 7);
    assert_eq!(session.port.events(), vec![SearchEvent::Reset]);
}

#[test]
fn dropping_session_leaves_no_timers() {
    let session = Session::new(shirts());
    let Session { clock, mut search, .. } = session;
    search.on_input_change("shirt");
    search.on_submit("Green Hat");
    search.on_input_change("x");
    search.on_blur();
    assert!(clock.pending() > 0);

    drop(search);
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.advance_ms(10_000), 0);
}

/// Bumps the view counter of every product that opens.
struct CountingPort {
    store: Arc<InMemoryStore>,
    inner: RecordingPort,
}

impl SearchPort for CountingPort {
    fn on_navigate(&self, product_id: &str) {
        self.store.increment_view_count(product_id);
        self.inner.on_navigate(product_id);
    }

    fn on_not_found(&self) {
        self.inner.on_not_found();
    }

    fn on_reset(&self) {
        self.inner.on_reset();
    }
}

#[test]
fn view_bumps_from_port_reach_next_ranking() {
    let clock = VirtualClock::new();
    let store = Arc::new(InMemoryStore::from_products(shirts()).unwrap());
    let port = Rc::new(CountingPort {
        store: Arc::clone(&store),
        inner: RecordingPort::default(),
    });
    let mut search = SearchController::new(
        Arc::clone(&store),
        port.clone(),
        Rc::new(clock.clone()),
        SearchConfig::default(),
    );

    for _ in 0..6 {
        search.on_submit("red shirt");
    }
    assert_eq!(store.get_product_by_id("A").unwrap().view_count, 11);

    search.on_input_change("shirt");
    clock.advance_ms(400);
    let order: Vec<_> = search.suggestions().into_iter().map(|s| s.id).collect();
    assert_eq!(order, vec!["A", "B"]);
    assert_eq!(port.inner.events().len(), 6);
}

#[test]
fn submit_navigates_to_what_resolve_finds() {
    let catalog = storefront();
    for query in ["Kaos Polos", "  sepatu LARI ", "sepatu", "R-03", "mug"] {
        let mut session = Session::new(catalog.clone());
        session.search.on_submit(query);
        let expected = katalog::resolve_exact(&catalog, &katalog::NormalizedQuery::new(query))
            .map(|p| SearchEvent::Navigate(p.id.clone()))
            .unwrap_or(SearchEvent::NotFound);
        assert_eq!(session.port.events(), vec![expected], "query {:?}", query);
    }
}
