// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks the ranking core consumes.
//!
//! Articles come out of the archive, postings come out of the word index.
//! Everything here is read-only once constructed: the core records evidence
//! *about* articles, it never changes them.
//!
//! # Invariants
//!
//! - **Posting**: `position` is unique per article across every word the index
//!   reports for that article. Title words and body words share one position
//!   space, so a title occurrence and a body occurrence never collide.
//!
//! - **FieldKind**: `Title.addweight() >= Body.addweight()`. The title marker
//!   used by scoring is "recorded with at least the title addweight".

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe article identifier.
///
/// Stable for the lifetime of a query; the engine keys its transient
/// per-search lookup on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ArticleId(pub u32);

impl ArticleId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ArticleId {
    fn from(id: u32) -> Self {
        ArticleId(id)
    }
}

impl From<ArticleId> for usize {
    fn from(id: ArticleId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Occurrence position of a word inside one article.
///
/// Word ordinal, not a byte offset. Monotonically increasing in document order.
pub type Position = u32;

// =============================================================================
// ARTICLES
// =============================================================================

/// An article handle: identity plus read-only title and body text.
///
/// Shared between the store and every result that references it via `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Article {
    pub fn new(id: impl Into<ArticleId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// =============================================================================
// POSTINGS
// =============================================================================

/// Which part of an article an occurrence was found in.
///
/// Ordering: Title < Body, so the "better" field sorts first, same as the
/// field hierarchy everywhere else in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Title,
    Body,
}

impl FieldKind {
    /// The addweight handed to `SearchResult::found_word` for an occurrence in
    /// this field. Title must never be lower than body.
    pub const fn addweight(self) -> u32 {
        match self {
            FieldKind::Title => 2,
            FieldKind::Body => 1,
        }
    }
}

/// One occurrence record from the word index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Posting {
    pub article: ArticleId,
    pub position: Position,
    pub field: FieldKind,
}

impl Posting {
    pub fn new(article: impl Into<ArticleId>, position: Position, field: FieldKind) -> Self {
        Self {
            article: article.into(),
            position,
            field,
        }
    }
}
