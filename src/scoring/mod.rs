// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: how suggestions get their order.
//!
//! The key insight is that match tier dominates everything else. An exact name
//! hit nobody looks at still beats a bestseller that merely mentions the query
//! in its description.

pub mod ranking;

pub use ranking::{by_view_count_desc, sort_by_popularity};
