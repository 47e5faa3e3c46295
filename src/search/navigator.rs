// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arrow-key highlighting over the suggestion list.
//!
//! The highlight is `None` (nothing, the `-1` of the storefront) or an index
//! below the list length. Arrow keys wrap instead of clamping:
//!
//! ```text
//! ArrowDown: i -> (i + 1) mod n
//! ArrowUp:   i -> (i - 1 + n) mod n
//! ```
//!
//! Both formulas run on the signed index with Euclidean modulo, so from "no
//! highlight" ArrowDown lands on 0 and ArrowUp on `n - 2` (0 when `n == 1`).
//! Keys are ignored while the list is empty or hidden.

/// Highlight state for a suggestion list of length `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardNavigator {
    highlight: Option<usize>,
}

impl KeyboardNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Signed form: `-1` for nothing highlighted.
    #[inline]
    pub fn index(&self) -> i64 {
        self.highlight.map_or(-1, |i| i as i64)
    }

    pub fn arrow_down(&mut self, n: usize, visible: bool) {
        self.step(n, visible, 1);
    }

    pub fn arrow_up(&mut self, n: usize, visible: bool) {
        self.step(n, visible, -1);
    }

    fn step(&mut self, n: usize, visible: bool, delta: i64) {
        if n == 0 || !visible {
            return;
        }
        let n = n as i64;
        let next = (self.index() + delta + n).rem_euclid(n);
        self.highlight = Some(next as usize);
    }

    /// Mouse hover. Out-of-range indices are ignored.
    pub fn hover(&mut self, index: usize, n: usize) {
        if index < n {
            self.highlight = Some(index);
        }
    }

    /// Keep the highlight inside a list that just became length `n`.
    pub fn clamp(&mut self, n: usize) {
        self.highlight = match self.highlight {
            Some(_) if n == 0 => None,
            Some(i) if i >= n => Some(n - 1),
            other => other,
        };
    }

    pub fn clear(&mut self) {
        self.highlight = None;
    }
}
