//! Shared test utilities and fixtures.

#![allow(dead_code)]

use zeno::testing::{search_over, MemorySearch};
use zeno::{Article, FieldKind, MemoryIndex, Posting, Results};

// Re-export canonical test utilities from zeno::testing
pub use zeno::testing::{make_article, sample_articles};

/// Engine over `articles`, tokenized with the default tokenizer.
pub fn memory_search(articles: Vec<Article>) -> MemorySearch {
    zeno::testing::memory_search(articles).unwrap()
}

/// One raw occurrence: (word, article id, position, field).
pub type RawPosting<'a> = (&'a str, u32, u32, FieldKind);

/// Build an index from explicit postings, bypassing the tokenizer.
///
/// Articles are registered with empty content; only their titles matter for
/// assertions.
pub fn raw_index(articles: &[(u32, &str)], postings: &[RawPosting<'_>]) -> MemoryIndex {
    let mut index = MemoryIndex::new();
    for &(id, title) in articles {
        index.add_article(Article::new(id, title, "")).unwrap();
    }
    for &(word, article, position, field) in postings {
        index.add_posting(word, Posting::new(article, position, field));
    }
    index
}

/// Engine over explicit postings.
pub fn raw_engine(articles: &[(u32, &str)], postings: &[RawPosting<'_>]) -> MemorySearch {
    search_over(raw_index(articles, postings))
}

/// Titles in rank order.
pub fn titles(results: &Results) -> Vec<String> {
    results
        .iter()
        .map(|r| r.article().title().to_string())
        .collect()
}

/// Article ids in rank order.
pub fn ids(results: &Results) -> Vec<u32> {
    results.iter().map(|r| r.article().id.get()).collect()
}
