// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The answer to one query: ranked results plus the expression that asked.
//!
//! `Results` does no deduplication. The engine guarantees one entry per
//! article before anything lands here.

use crate::search::ScoredResult;
use serde::Serialize;
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    expression: String,
    results: Vec<ScoredResult>,
}

impl Results {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            results: Vec::new(),
        }
    }

    pub(crate) fn from_ranked(expression: impl Into<String>, results: Vec<ScoredResult>) -> Self {
        Self {
            expression: expression.into(),
            results,
        }
    }

    pub fn set_expression(&mut self, expression: impl Into<String>) {
        self.expression = expression.into();
    }

    /// The query expression, verbatim.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn push(&mut self, result: ScoredResult) {
        self.results.push(result);
    }

    /// Keep only the first `limit` results.
    pub fn truncate(&mut self, limit: usize) {
        self.results.truncate(limit);
    }

    pub fn as_slice(&self) -> &[ScoredResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<ScoredResult> {
        self.results
    }
}

impl Deref for Results {
    type Target = [ScoredResult];

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

impl Extend<ScoredResult> for Results {
    fn extend<T: IntoIterator<Item = ScoredResult>>(&mut self, iter: T) {
        self.results.extend(iter);
    }
}

impl IntoIterator for Results {
    type Item = ScoredResult;
    type IntoIter = std::vec::IntoIter<ScoredResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a ScoredResult;
    type IntoIter = std::slice::Iter<'a, ScoredResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
