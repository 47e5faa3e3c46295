//! Shared test utilities and fixtures.

#![allow(dead_code)]

use katalog::{InMemoryStore, Product, SearchConfig, SearchController, VirtualClock};
use std::rc::Rc;
use std::sync::Arc;

// Re-export canonical test utilities from katalog::testing
pub use katalog::testing::{make_product, make_product_full, RecordingPort};

// ============================================================================
// CATALOGS
// ============================================================================

/// The two-shirt catalog used by the storefront walkthroughs.
pub fn shirts() -> Vec<Product> {
    vec![
        make_product("A", "Red Shirt", 5),
        make_product("B", "Blue Shirt", 10),
    ]
}

/// A small storefront catalog with categories, tags and rack codes.
pub fn storefront() -> Vec<Product> {
    let mut products = vec![
        make_product_full("p1", "Kemeja Flanel", "Pakaian", "kemeja lengan panjang", &["flanel", "pria"], 120),
        make_product_full("p2", "Kaos Polos", "Pakaian", "katun combed", &["basic"], 300),
        make_product_full("p3", "Sepatu Lari", "Sepatu", "ringan untuk lari pagi", &["olahraga"], 210),
        make_product_full("p4", "Sandal Gunung", "Sepatu", "", &["outdoor"], 45),
        make_product_full("p5", "Topi Rimba", "Aksesoris", "topi outdoor", &["outdoor"], 80),
        make_product_full("p6", "Tas Selempang", "Aksesoris", "kulit sintetis", &[], 300),
        make_product_full("p7", "Mug Keramik", "Dapur", "mug putih", &["hadiah"], 12),
    ];
    for (i, product) in products.iter_mut().enumerate() {
        product.rack_location = format!("R-{:02}", i + 1);
    }
    products
}

pub fn ids(products: &[katalog::Suggestion<'_>]) -> Vec<String> {
    products.iter().map(|s| s.product.id.clone()).collect()
}

// ============================================================================
// SESSION HARNESS
// ============================================================================

/// A controller on a virtual clock, recording everything it emits.
pub struct Session {
    pub clock: VirtualClock,
    pub port: Rc<RecordingPort>,
    pub store: Arc<InMemoryStore>,
    pub search: SearchController<InMemoryStore>,
}

impl Session {
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_config(products, SearchConfig::default())
    }

    pub fn with_config(products: Vec<Product>, config: SearchConfig) -> Self {
        let clock = VirtualClock::new();
        let port = Rc::new(RecordingPort::default());
        let store = Arc::new(InMemoryStore::from_products(products).expect("unique ids"));
        let search = SearchController::new(
            Arc::clone(&store),
            port.clone(),
            Rc::new(clock.clone()),
            config,
        );
        Self { clock, port, store, search }
    }

    /// Type `text` one character at a time, `gap_ms` apart.
    pub fn type_slowly(&mut self, text: &str, gap_ms: u64) {
        let mut raw = self.search.raw_query();
        for ch in text.chars() {
            raw.push(ch);
            self.search.on_input_change(&raw);
            self.clock.advance_ms(gap_ms);
        }
    }

    pub fn suggestion_ids(&self) -> Vec<String> {
        self.search.suggestions().into_iter().map(|s| s.id).collect()
    }
}
