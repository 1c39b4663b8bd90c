// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use zeno::{AddweightPolicy, MemoryIndex, Search, WeightConfig, WordTokenizer};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    init_logging();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            corpus,
            weights,
            addweight,
            limit,
            json,
            query,
        } => run_search(&corpus, weights.as_deref(), addweight, limit, json, &query.join(" ")),
        Commands::Weights => print_default_weights(),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("zeno=info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_search(
    corpus: &Path,
    weights: Option<&Path>,
    policy: AddweightPolicy,
    limit: usize,
    json: bool,
    expr: &str,
) -> Result<()> {
    let index = MemoryIndex::from_path(corpus, &WordTokenizer::new())
        .with_context(|| format!("failed to load corpus {}", corpus.display()))?;
    tracing::info!(
        articles = index.article_count(),
        words = index.vocabulary_len(),
        "corpus loaded"
    );

    let weights = match weights {
        Some(path) => WeightConfig::from_path(path)
            .with_context(|| format!("failed to load weights {}", path.display()))?,
        None => WeightConfig::default(),
    };

    let index = Arc::new(index);
    let engine = Search::new(Arc::clone(&index), index)
        .with_weights(weights)
        .with_policy(policy);

    let mut results = engine
        .search(expr)
        .with_context(|| format!("search for '{}' failed", expr))?;
    results.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display::print_results(&results);
    }
    Ok(())
}

fn print_default_weights() -> Result<()> {
    println!("{}", WeightConfig::default().to_json_pretty()?);
    Ok(())
}
