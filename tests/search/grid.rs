//! The category-aware grid filter.

use super::common::{storefront, Session};
use katalog::{categories, filter_grid, CategorySelection, NormalizedQuery};

fn grid_ids(category: &str, query: &str) -> Vec<String> {
    let snapshot = storefront();
    filter_grid(&snapshot, &category.into(), &NormalizedQuery::new(query))
        .into_iter()
        .map(|p| p.id.clone())
        .collect()
}

#[test]
fn all_with_empty_query_is_whole_catalog_in_order() {
    assert_eq!(
        grid_ids("all", ""),
        vec!["p1", "p2", "p3", "p4", "p5", "p6", "p7"]
    );
}

#[test]
fn category_narrows_without_reordering() {
    assert_eq!(grid_ids("Aksesoris", ""), vec!["p5", "p6"]);
    assert_eq!(grid_ids("Aksesoris", "outdoor"), vec!["p5"]);
}

#[test]
fn category_comparison_is_exact() {
    assert!(grid_ids("aksesoris", "").is_empty());
    assert!(grid_ids("Aks", "").is_empty());
}

#[test]
fn rack_code_finds_product() {
    assert_eq!(grid_ids("all", "r-03"), vec!["p3"]);
}

#[test]
fn grid_has_no_cap() {
    let snapshot: Vec<_> = (0..25)
        .map(|i| super::common::make_product(&format!("p{}", i), "Kaos", i))
        .collect();
    let out = filter_grid(&snapshot, &CategorySelection::All, &NormalizedQuery::new("kaos"));
    assert_eq!(out.len(), 25);
}

#[test]
fn picker_lists_categories_once() {
    let snapshot = storefront();
    assert_eq!(
        categories(&snapshot),
        vec!["Pakaian", "Sepatu", "Aksesoris", "Dapur"]
    );
}

#[test]
fn controller_grid_follows_raw_query_immediately() {
    let mut session = Session::new(storefront());
    session.search.on_input_change("kaos");
    // No time has passed: the debounce hasn't fired but the grid already narrowed.
    assert!(session.search.suggestions().is_empty());
    let grid: Vec<_> = session.search.grid().into_iter().map(|p| p.id).collect();
    assert_eq!(grid, vec!["p2"]);

    session.search.select_category("Dapur".into());
    assert!(session.search.grid().is_empty());

    session.search.select_category(CategorySelection::All);
    session.search.on_input_change("");
    assert_eq!(session.search.grid().len(), 7);
}
