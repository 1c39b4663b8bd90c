// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory inverted index over a set of articles.
//!
//! # Position layout
//!
//! Title and body share one position space per article. Title words take the
//! title's word ordinals `0..t`; body words continue at `t + ordinal`. Title
//! occurrences are tagged `FieldKind::Title`, body ones `FieldKind::Body`.
//! Positions are therefore unique per article across every word, which is the
//! guarantee the ranking core depends on.
//!
//! # Invariants
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is sorted by (article, position)
//! 2. **NON_EMPTY**: every indexed word has at least one posting
//!
//! `add_posting` writes raw postings and bypasses the layout above. It exists
//! for readers that already have resolved postings, and for building corrupt
//! indexes on purpose in tests.

use crate::error::{Result, SearchError};
use crate::index::{ArticleStore, WordIndex};
use crate::tokenize::{Token, Tokenizer};
use crate::types::{Article, ArticleId, FieldKind, Posting};
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// One entry of a JSON corpus file. Missing ids are assigned by file order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntry {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default)]
pub struct MemoryIndex {
    articles: HashMap<ArticleId, Arc<Article>>,
    terms: HashMap<String, Vec<Posting>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize every article and index title and body words.
    ///
    /// Fails with `DuplicateArticle` if two articles share an id.
    pub fn build(
        articles: impl IntoIterator<Item = Article>,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Self> {
        let mut index = Self::new();
        for article in articles {
            index.index_article(article, tokenizer)?;
        }
        index.sort_postings();
        tracing::debug!(
            articles = index.articles.len(),
            words = index.terms.len(),
            "built in-memory index"
        );
        Ok(index)
    }

    /// Parse a JSON corpus (`[{"title": ..., "content": ...}, ...]`) and build.
    ///
    /// An entry without an id takes its index in the file, so an explicit id
    /// can collide with it. That is reported as `DuplicateArticle`.
    pub fn from_json_str(json: &str, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let entries: Vec<CorpusEntry> = serde_json::from_str(json)?;
        let articles = entries.into_iter().enumerate().map(|(i, entry)| {
            let id = entry.id.unwrap_or(i as u32);
            Article::new(id, entry.title, entry.content)
        });
        Self::build(articles, tokenizer)
    }

    pub fn from_path(path: impl AsRef<Path>, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json, tokenizer)
    }

    /// Register an article without indexing its text.
    ///
    /// A second article with the same id is rejected and the first one stays.
    pub fn add_article(&mut self, article: Article) -> Result<Arc<Article>> {
        match self.articles.entry(article.id) {
            Entry::Occupied(_) => {
                tracing::warn!(article = %article.id, "article id registered twice");
                Err(SearchError::DuplicateArticle(article.id))
            }
            Entry::Vacant(slot) => Ok(Arc::clone(slot.insert(Arc::new(article)))),
        }
    }

    /// Append a raw posting, keeping the list sorted.
    pub fn add_posting(&mut self, word: &str, posting: Posting) {
        let list = self.terms.entry(word.to_string()).or_default();
        let at = list.partition_point(|p| p < &posting);
        list.insert(at, posting);
    }

    // Registers first: a rejected article contributes no postings
    fn index_article(&mut self, article: Article, tokenizer: &dyn Tokenizer) -> Result<()> {
        let article = self.add_article(article)?;
        let title_tokens = tokenizer.tokenize(article.title());
        let body_tokens = tokenizer.tokenize(article.content());
        let body_offset = title_tokens.last().map_or(0, |t| t.ordinal + 1);

        self.push_tokens(article.id, title_tokens, 0, FieldKind::Title);
        self.push_tokens(article.id, body_tokens, body_offset, FieldKind::Body);
        Ok(())
    }

    fn push_tokens(&mut self, id: ArticleId, tokens: Vec<Token>, offset: u32, field: FieldKind) {
        for Token { word, ordinal } in tokens {
            self.terms
                .entry(word)
                .or_default()
                .push(Posting::new(id, offset + ordinal, field));
        }
    }

    // INVARIANT: POSTING_LIST_SORTED
    fn sort_postings(&mut self) {
        for postings in self.terms.values_mut() {
            postings.sort();
        }
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.terms.contains_key(word)
    }
}

impl WordIndex for MemoryIndex {
    fn postings(&self, word: &str) -> Result<Vec<Posting>> {
        Ok(self.terms.get(word).cloned().unwrap_or_default())
    }
}

impl ArticleStore for MemoryIndex {
    fn article(&self, id: ArticleId) -> Result<Arc<Article>> {
        self.articles
            .get(&id)
            .cloned()
            .ok_or(SearchError::ArticleNotFound(id))
    }
}
