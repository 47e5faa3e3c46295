// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the katalog command-line interface.
//!
//! One-shot subcommands (`suggest`, `grid`, `resolve`, `stats`, `categories`)
//! run the pure pieces against a catalog file. `session` drives a live search
//! controller from line commands, on a virtual clock by default or in real
//! time with `--realtime`.

pub mod display;
pub mod session;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "katalog",
    about = "Debounced product suggestions and search for a storefront catalog",
    version
)]
pub struct Cli {
    /// Catalog file: a JSON array of products or {"products": [...]}
    #[arg(short, long, global = true, default_value = "data/catalog.json")]
    pub catalog: PathBuf,

    /// Search config file (debounceMs, noticeMs, blurHideMs, suggestionLimit)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace). KATALOG_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank suggestions for a query (empty query lists the most viewed)
    Suggest {
        #[arg(default_value = "")]
        query: String,

        /// Maximum number of suggestions (1-10)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the product grid for a query and category
    Grid {
        #[arg(default_value = "")]
        query: String,

        /// Exact category name, or "all"
        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Resolve a query to a product by exact name; exits 1 when nothing matches
    Resolve { query: String },

    /// Catalog summary: totals, averages, best seller
    Stats {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List categories in catalog order
    Categories,

    /// Interactive search session driven by line commands (type `help`)
    Session {
        /// Fire timers in real time instead of on `wait`
        #[arg(long)]
        realtime: bool,

        /// Override the config file's debounce delay
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Override the config file's not-found notice duration
        #[arg(long)]
        notice_ms: Option<u64>,
    },
}
