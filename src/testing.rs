// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! Always compiled but hidden from documentation.

#![doc(hidden)]

use crate::error::Result;
use crate::index::MemoryIndex;
use crate::search::Search;
use crate::tokenize::WordTokenizer;
use crate::types::Article;
use std::sync::Arc;

/// Engine over one shared in-memory index serving as both index and store.
pub type MemorySearch = Search<Arc<MemoryIndex>, Arc<MemoryIndex>>;

/// Create a shared article handle.
pub fn make_article(id: u32, title: &str, content: &str) -> Arc<Article> {
    Arc::new(Article::new(id, title, content))
}

/// Build an engine by tokenizing `articles` with the default tokenizer.
pub fn memory_search(articles: Vec<Article>) -> Result<MemorySearch> {
    let index = Arc::new(MemoryIndex::build(articles, &WordTokenizer::new())?);
    Ok(Search::new(Arc::clone(&index), index))
}

/// Build an engine over an already populated index (raw postings).
pub fn search_over(index: MemoryIndex) -> MemorySearch {
    let index = Arc::new(index);
    Search::new(Arc::clone(&index), index)
}

/// A small encyclopedia used across tests.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article::new(0, "Red fox", "The red fox is the largest of the true foxes."),
        Article::new(1, "Gray wolf", "The wolf is a large canine. Unlike the fox it hunts in packs."),
        Article::new(2, "Quick sort", "Quick sort is a divide and conquer sorting algorithm."),
        Article::new(3, "Brown bear", "A quick and brown bear. The fox watched from afar."),
        Article::new(4, "Forest", "Forests host foxes, wolves, bears and many birds."),
    ]
}
