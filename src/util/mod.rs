// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Query folding lives here so the ranker, the grid filter and the controller
//! all agree on what "case-insensitive" means.

pub mod normalize;
