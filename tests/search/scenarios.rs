//! The storefront walkthroughs, end to end.

use super::common::{ids, shirts, Session};
use katalog::{rank_suggestions, KeyboardNavigator, NormalizedQuery, SearchEvent, SearchState};

#[test]
fn empty_query_lists_most_viewed_first() {
    let snapshot = shirts();
    let out = rank_suggestions(&snapshot, &NormalizedQuery::new(""));
    assert_eq!(ids(&out), vec!["B", "A"]);
}

#[test]
fn shared_partial_tier_orders_by_views() {
    let snapshot = shirts();
    let out = rank_suggestions(&snapshot, &NormalizedQuery::new("shirt"));
    assert_eq!(ids(&out), vec!["B", "A"]);
}

#[test]
fn exact_name_beats_views() {
    let snapshot = shirts();
    let out = rank_suggestions(&snapshot, &NormalizedQuery::new("Red Shirt"));
    assert_eq!(ids(&out), vec!["A", "B"]);
}

#[test]
fn submit_exact_name_navigates() {
    let mut session = Session::new(shirts());
    session.search.on_submit("Blue Shirt");

    assert_eq!(session.port.events(), vec![SearchEvent::Navigate("B".into())]);
    assert_eq!(session.search.state(), SearchState::Idle);
}

#[test]
fn submit_unknown_name_shows_notice_for_four_seconds() {
    let mut session = Session::new(shirts());
    session.search.on_submit("Green Hat");

    assert_eq!(session.search.state(), SearchState::NotFound);
    assert_eq!(session.port.events(), vec![SearchEvent::NotFound]);

    session.clock.advance_ms(3_999);
    assert_eq!(session.search.state(), SearchState::NotFound);

    session.clock.advance_ms(1);
    assert_eq!(session.search.state(), SearchState::Idle);
    assert_eq!(
        session.port.events(),
        vec![SearchEvent::NotFound, SearchEvent::NoticeDismissed]
    );
}

#[test]
fn arrows_wrap_over_three_suggestions() {
    let mut nav = KeyboardNavigator::new();
    let mut visited = Vec::new();
    for _ in 0..4 {
        nav.arrow_down(3, true);
        visited.push(nav.index());
    }
    assert_eq!(visited, vec![0, 1, 2, 0]);

    nav.arrow_up(3, true);
    assert_eq!(nav.index(), 2);
}
