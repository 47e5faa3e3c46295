// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization and case-insensitive field matching.
//!
//! Every comparison in the search core happens between a normalized query and a
//! lowercased field. The query is trimmed and lowercased once, up front; fields
//! are lowercased on demand because the snapshot can change under us and
//! caching folded copies would mean caching the snapshot.

use std::fmt;

/// A trimmed, case-folded query.
///
/// Whitespace-only input folds to the empty query, which every matcher treats
/// as "match everything" (grid) or "show the most popular" (suggestions).
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        NormalizedQuery(normalize(raw))
    }

    /// Missing input is the empty query.
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive equality against a raw field.
    #[inline]
    pub fn equals(&self, field: &str) -> bool {
        fold_eq(field, &self.0)
    }

    /// Case-insensitive substring test against a raw field.
    ///
    /// The empty query is contained in everything.
    #[inline]
    pub fn is_in(&self, field: &str) -> bool {
        self.0.is_empty() || field.to_lowercase().contains(self.0.as_str())
    }

    /// `true` if the query is a substring of any of `fields`.
    pub fn is_in_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.0.is_empty() || fields.into_iter().any(|field| self.is_in(field))
    }
}

impl From<&str> for NormalizedQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a query string: trim surrounding whitespace, then lowercase.
///
/// Inner whitespace is kept as typed. "Red  Shirt" and "Red Shirt" are
/// different queries, exactly as they are different product names.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Compare a raw field against an already-folded needle.
///
/// The field is not trimmed: a product named " Hat" never equals "hat".
#[inline]
fn fold_eq(field: &str, folded: &str) -> bool {
    // Fast path: ASCII fields can be compared without allocating.
    if field.is_ascii() {
        return field.len() == folded.len() && field.eq_ignore_ascii_case(folded);
    }
    field.to_lowercase() == folded
}
