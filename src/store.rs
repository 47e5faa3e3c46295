// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The product store seam.
//!
//! The search core never owns products. It asks a [`ProductStore`] for the
//! current snapshot on every pass, because the store may swap that snapshot at
//! any moment (a backend refresh, an admin edit). Holding on to an old one
//! across a timer boundary would rank stale data.
//!
//! [`InMemoryStore`] is the implementation the CLI and tests use: a snapshot
//! behind a `parking_lot::RwLock`, loadable from a JSON catalog file.

use crate::types::{Product, ProductSnapshot};
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read side of the product catalog.
///
/// Implementations must not fail: return the latest known snapshot, possibly
/// empty.
pub trait ProductStore {
    fn list_products(&self) -> ProductSnapshot;
}

impl<S: ProductStore + ?Sized> ProductStore for Arc<S> {
    fn list_products(&self) -> ProductSnapshot {
        (**self).list_products()
    }
}

/// Errors from loading or replacing a catalog.
#[derive(Debug)]
pub enum StoreError {
    /// The catalog file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The catalog is not valid JSON or not shaped like a product list.
    Parse { path: Option<PathBuf>, source: serde_json::Error },
    /// Two products share an id.
    DuplicateId { id: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "cannot read catalog {}: {}", path.display(), source)
            }
            StoreError::Parse { path: Some(path), source } => {
                write!(f, "invalid catalog {}: {}", path.display(), source)
            }
            StoreError::Parse { path: None, source } => write!(f, "invalid catalog: {}", source),
            StoreError::DuplicateId { id } => write!(f, "duplicate product id '{}'", id),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Parse { source, .. } => Some(source),
            StoreError::DuplicateId { .. } => None,
        }
    }
}

/// Accepted catalog layouts: a bare array, or `{ "products": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl From<CatalogFile> for Vec<Product> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::List(products) | CatalogFile::Wrapped { products } => products,
        }
    }
}

/// Replaceable in-memory snapshot.
///
/// Readers get an `Arc` clone and never block writers for longer than the
/// pointer swap.
#[derive(Debug)]
pub struct InMemoryStore {
    snapshot: RwLock<ProductSnapshot>,
}

impl InMemoryStore {
    /// An empty store. Searching it yields no matches.
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Build a store, rejecting duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, StoreError> {
        check_unique_ids(&products)?;
        Ok(Self {
            snapshot: RwLock::new(Arc::from(products)),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|source| StoreError::Parse { path: None, source })?;
        Self::from_products(file.into())
    }

    /// Load a catalog file (bare array or `{ "products": [...] }`).
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        let store = Self::from_products(file.into())?;
        tracing::info!(path = %path.display(), products = store.len(), "loaded catalog");
        Ok(store)
    }

    /// Swap in a new snapshot. Existing readers keep the one they hold.
    pub fn replace(&self, products: Vec<Product>) -> Result<(), StoreError> {
        check_unique_ids(&products)?;
        let count = products.len();
        *self.snapshot.write() = Arc::from(products);
        tracing::debug!(products = count, "catalog snapshot replaced");
        Ok(())
    }

    pub fn get_product_by_id(&self, id: &str) -> Option<Product> {
        self.snapshot.read().iter().find(|p| p.id == id).cloned()
    }

    /// Bump a product's view counter. Returns `false` for an unknown id.
    ///
    /// Copy-on-write: the bumped catalog is a new snapshot.
    pub fn increment_view_count(&self, id: &str) -> bool {
        let mut guard = self.snapshot.write();
        let Some(pos) = guard.iter().position(|p| p.id == id) else {
            tracing::warn!(id, "view count bump for unknown product");
            return false;
        };
        let mut products = guard.to_vec();
        products[pos].view_count = products[pos].view_count.saturating_add(1);
        *guard = Arc::from(products);
        true
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.read().is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryStore {
    fn list_products(&self) -> ProductSnapshot {
        Arc::clone(&self.snapshot.read())
    }
}

fn check_unique_ids(products: &[Product]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(StoreError::DuplicateId { id: product.id.clone() });
        }
    }
    Ok(())
}
