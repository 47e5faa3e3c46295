// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use katalog::{
    categories, filter_grid, rank_suggestions_with_limit, resolve_exact, CatalogStats,
    CategorySelection, InMemoryStore, NormalizedQuery, ProductStore, SearchConfig,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), err);
            ExitCode::FAILURE
        }
    }
}

/// `KATALOG_LOG`, then `RUST_LOG`, then the verbosity flags. Logs go to stderr.
fn init_tracing(verbose: u8, quiet: bool) {
    let fallback = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "katalog=debug,info",
        (false, _) => "katalog=trace,debug",
    };
    let filter = EnvFilter::try_from_env("KATALOG_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    let store = Arc::new(
        InMemoryStore::load_json(&cli.catalog)
            .with_context(|| format!("loading catalog {}", cli.catalog.display()))?,
    );

    match cli.command {
        Commands::Suggest { query, limit } => {
            if let Some(limit) = limit {
                config.suggestion_limit = limit;
                config.validate()?;
            }
            print_suggestions(&store, &query, config.suggestion_limit);
        }
        Commands::Grid { query, category } => {
            print_grid(&store, &query, &CategorySelection::from(category.as_str()));
        }
        Commands::Resolve { query } => return Ok(resolve(&store, &query)),
        Commands::Stats { json } => {
            let stats = CatalogStats::from_products(&store.list_products());
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
        Commands::Categories => {
            let snapshot = store.list_products();
            for category in categories(&snapshot) {
                println!("{}", category);
            }
        }
        Commands::Session {
            realtime,
            debounce_ms,
            notice_ms,
        } => {
            if let Some(ms) = debounce_ms {
                config.debounce_ms = ms;
            }
            if let Some(ms) = notice_ms {
                config.notice_ms = ms;
            }
            config.validate()?;
            cli::session::run(store, config, realtime)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_suggestions(store: &InMemoryStore, query: &str, limit: usize) {
    let snapshot = store.list_products();
    let normalized = NormalizedQuery::new(query);
    let ranked = rank_suggestions_with_limit(&snapshot, &normalized, limit);

    let label = if normalized.is_empty() {
        "MOST VIEWED".to_string()
    } else {
        format!("SUGGESTIONS for \"{}\"", normalized)
    };
    section_top(&label);
    if ranked.is_empty() {
        row(&themed(GRAY, &[DIM], " no matches"));
    }
    for (i, s) in ranked.iter().enumerate() {
        row(&format!(
            " {:>2}  {} {} {} {}",
            i + 1,
            pad_right(&tier_badge(s.tier), 10),
            pad_right(&truncate(&s.product.name, 28), 28),
            pad_right(&themed(GRAY, &[], &truncate(&s.product.category, 12)), 12),
            views(s.product.view_count)
        ));
    }
    section_bot();
}

fn print_grid(store: &InMemoryStore, query: &str, selection: &CategorySelection) {
    let snapshot = store.list_products();
    let products = filter_grid(&snapshot, selection, &NormalizedQuery::new(query));

    section_top(&format!("GRID · {} · {} products", selection, products.len()));
    for product in products {
        row(&format!(
            " {} {} {} {:>12.0}",
            pad_right(&truncate(&product.id, 8), 8),
            pad_right(&truncate(&product.name, 30), 30),
            pad_right(&themed(GRAY, &[], &truncate(&product.category, 12)), 12),
            product.price
        ));
        if !product.rack_location.is_empty() {
            row(&themed(GRAY, &[DIM], &format!("          rack {}", product.rack_location)));
        }
    }
    section_bot();
}

fn resolve(store: &InMemoryStore, query: &str) -> ExitCode {
    let normalized = NormalizedQuery::new(query);
    let snapshot = store.list_products();
    match resolve_exact(&snapshot, &normalized) {
        Some(product) => {
            println!("{} {}", product.id, product.name);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{}", themed(RED, &[BOLD], "product not found"));
            ExitCode::from(1)
        }
    }
}

fn print_stats(stats: &CatalogStats) {
    title_box("CATALOG SUMMARY");
    section_top("TOTALS");
    row(&format!(" products     {:>12}", stats.total_products));
    row(&format!(" categories   {:>12}", stats.categories));
    row(&format!(" views        {:>12}", stats.total_views));
    section_mid("AVERAGES");
    row(&format!(" price        {:>12.2}", stats.avg_price));
    row(&format!(" rating       {:>12.2}", stats.avg_rating));
    section_mid("BEST SELLER");
    match &stats.best_seller {
        Some(best) => row(&format!(
            " {} {} {}",
            themed(GREEN, &[BOLD], &truncate(&best.name, 30)),
            themed(GRAY, &[], &best.category),
            views(best.view_count)
        )),
        None => row(&themed(GRAY, &[DIM], " empty catalog")),
    }
    section_bot();
}
