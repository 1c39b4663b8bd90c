// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance ranking for full-text search over read-only article archives.
//!
//! Given a query, the engine looks every query word up in a word index,
//! accumulates per-article evidence (which words matched, how often, where),
//! scores each article and returns the articles ranked.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │ tokenize.rs │────▶│  index/      │────▶│ search/engine   │
//! │ (words)     │     │ (postings,   │     │ (accumulate,    │
//! │             │     │  articles)   │     │  finalize, rank)│
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!                                                   │
//!        ┌──────────────────────────────────────────┤
//!        ▼                                          ▼
//! ┌─────────────────────┐               ┌──────────────────────┐
//! │ search/result.rs    │──────────────▶│ scoring/             │
//! │ (SearchResult,      │               │ (WeightConfig,       │
//! │  ScoredResult)      │               │  curves, ranking)    │
//! └─────────────────────┘               └──────────────────────┘
//! ```
//!
//! # Ranking laws
//!
//! With non-negative weights (and a title weight of at least 1):
//!
//! - more occurrences of a word never lower a priority
//! - an earlier first occurrence never lowers a priority, unless moving one
//!   word earlier pulls it away from the other matched words: the wider
//!   cluster then costs proximity, which can outweigh the position gain
//! - matching two distinct words beats matching one word twice
//! - tighter clusters of distinct words beat looser ones
//! - the same query over the same index and weights ranks identically
//!
//! # Usage
//!
//! ```
//! use zeno::{Article, MemoryIndex, Search, WordTokenizer};
//! use std::sync::Arc;
//!
//! let index = Arc::new(MemoryIndex::build(
//!     vec![Article::new(0, "Red fox", "a small fox")],
//!     &WordTokenizer::new(),
//! ).unwrap());
//! let engine = Search::new(Arc::clone(&index), index);
//!
//! let results = engine.search("fox").unwrap();
//! assert_eq!(results[0].article().title(), "Red fox");
//! ```

pub mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tokenize;
mod types;

pub use error::{Result, SearchError};
pub use index::{ArticleStore, CorpusEntry, MemoryIndex, WordIndex};
pub use scoring::ranking::{compare_results, rank};
pub use scoring::WeightConfig;
pub use search::{AddweightPolicy, MatchEvidence, Results, ScoredResult, Search, SearchResult};
pub use tokenize::{normalize, Token, Tokenizer, WordTokenizer};
pub use types::{Article, ArticleId, FieldKind, Position, Posting};
