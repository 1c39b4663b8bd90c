// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the ranking core.
//!
//! Only one error originates in the core itself: a duplicate occurrence
//! position, which means the index is corrupt. Everything else is raised by a
//! collaborator (index, article store, weight file) and passes through
//! `search()` unchanged.
//!
//! A word with no postings and an empty query are not errors. They produce no
//! evidence and an empty `Results` respectively.

use crate::types::{ArticleId, Position};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The index reported the same occurrence position twice for one article.
    /// Fatal and non-retryable.
    #[error(
        "article {article}: position {position} already recorded for '{existing}', refusing '{word}'"
    )]
    InvariantViolation {
        article: ArticleId,
        position: Position,
        existing: String,
        word: String,
    },

    /// A posting referenced an article the store cannot resolve.
    #[error("article {0} not found in store")]
    ArticleNotFound(ArticleId),

    /// Two articles of one corpus share an id. Their positions would collide.
    #[error("article {0} registered twice")]
    DuplicateArticle(ArticleId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// True for errors that signal corrupt index data rather than a
    /// collaborator failure.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, SearchError::InvariantViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
