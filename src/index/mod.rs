// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two read-only collaborators the ranking core depends on.
//!
//! `WordIndex` answers "where does this word occur", `ArticleStore` answers
//! "what is this article". Archive readers implement them over their on-disk
//! files; `MemoryIndex` implements both for corpora that fit in memory.
//!
//! Implementations must be safe for concurrent reads if the engine is shared
//! across threads, and must report positions that are unique per article.
//! Whatever error they return travels through `search()` untouched.

mod memory;

pub use memory::{CorpusEntry, MemoryIndex};

use crate::error::Result;
use crate::types::{Article, ArticleId, Posting};
use std::sync::Arc;

pub trait WordIndex {
    /// Every occurrence of `word`. An unknown word yields an empty list.
    fn postings(&self, word: &str) -> Result<Vec<Posting>>;
}

pub trait ArticleStore {
    fn article(&self, id: ArticleId) -> Result<Arc<Article>>;
}

impl<T: WordIndex + ?Sized> WordIndex for &T {
    fn postings(&self, word: &str) -> Result<Vec<Posting>> {
        (**self).postings(word)
    }
}

impl<T: WordIndex + ?Sized> WordIndex for Arc<T> {
    fn postings(&self, word: &str) -> Result<Vec<Posting>> {
        (**self).postings(word)
    }
}

impl<T: ArticleStore + ?Sized> ArticleStore for &T {
    fn article(&self, id: ArticleId) -> Result<Arc<Article>> {
        (**self).article(id)
    }
}

impl<T: ArticleStore + ?Sized> ArticleStore for Arc<T> {
    fn article(&self, id: ArticleId) -> Result<Arc<Article>> {
        (**self).article(id)
    }
}
