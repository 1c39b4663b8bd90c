// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the zeno command-line interface.
//!
//! Two subcommands: `search` ranks a JSON corpus against a query, `weights`
//! prints the default weight document to start tuning from.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zeno::AddweightPolicy;

#[derive(Parser)]
#[command(
    name = "zeno",
    about = "Relevance ranking for full-text article search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the articles of a corpus against a query
    Search {
        /// JSON corpus: an array of {"title": ..., "content": ...}
        #[arg(short, long)]
        corpus: PathBuf,

        /// JSON weight document; missing keys keep their defaults
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// How repeated matches of one word combine their field weights
        #[arg(long, default_value = "max")]
        addweight: AddweightPolicy,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Query words
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Print the default weights as JSON
    Weights,
}
