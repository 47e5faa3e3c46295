//! Highlight movement, hover and click through the controller.

use super::common::{shirts, storefront, Session};
use katalog::{NavKey, SearchEvent};

fn suggesting(query: &str) -> Session {
    let mut session = Session::new(storefront());
    session.search.on_input_change(query);
    session.clock.advance_ms(400);
    session
}

#[test]
fn arrows_ignored_before_list_exists() {
    let mut session = Session::new(shirts());
    session.search.on_key(NavKey::ArrowDown);
    assert_eq!(session.search.highlight_index(), -1);
}

#[test]
fn arrow_up_from_nothing_lands_second_to_last() {
    let mut session = suggesting("sepatu");
    let n = session.search.suggestions().len() as i64;
    session.search.on_key(NavKey::ArrowUp);
    assert_eq!(session.search.highlight_index(), n - 2);
}

#[test]
fn hover_then_arrow_continues_from_hovered() {
    let mut session = suggesting("sepatu");
    session.search.on_hover(3);
    session.search.on_key(NavKey::ArrowDown);
    assert_eq!(session.search.highlight(), Some(4));
}

#[test]
fn highlight_clamped_when_list_shrinks() {
    let mut session = Session::new(storefront());
    session.search.on_input_change("");
    session.clock.advance_ms(400);
    session.search.on_hover(6);

    session.store.replace(shirts()).unwrap();
    session.search.on_input_change("shirt");
    session.clock.advance_ms(400);
    assert_eq!(session.search.suggestions().len(), 2);
    assert_eq!(session.search.highlight(), Some(1));
}

#[test]
fn enter_with_highlight_submits_typed_text() {
    let mut session = Session::new(shirts());
    session.search.on_input_change("Red Shirt");
    session.clock.advance_ms(400);
    session.search.on_key(NavKey::ArrowDown);
    session.search.on_key(NavKey::ArrowDown);
    assert_eq!(session.search.highlighted().unwrap().id, "B");

    session.search.on_key(NavKey::Enter);
    assert_eq!(session.port.events(), vec![SearchEvent::Navigate("A".into())]);
}

#[test]
fn click_submits_suggestion_name() {
    let mut session = suggesting("outdoor");
    session.search.on_suggestion_click(1);
    assert_eq!(session.search.raw_query(), "Sandal Gunung");
    assert_eq!(session.port.events(), vec![SearchEvent::Navigate("p4".into())]);
}

#[test]
fn click_out_of_range_does_nothing() {
    let mut session = suggesting("outdoor");
    session.search.on_suggestion_click(99);
    assert!(session.port.events().is_empty());
    assert_eq!(session.search.raw_query(), "outdoor");
}
