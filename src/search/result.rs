// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-article match evidence, in two phases.
//!
//! `SearchResult` is the accumulating phase: the engine feeds it one
//! `found_word` per occurrence while resolving a query. `finalize` consumes it
//! and produces a `ScoredResult`, whose priority is computed exactly once from
//! one weight snapshot and never changes afterwards. There is no cache to
//! invalidate because there is nothing left to mutate.
//!
//! # Invariants
//!
//! - Every word in the evidence map has at least one entry in the position map.
//! - A position appears at most once; a second report is an `InvariantViolation`
//!   and leaves the result untouched.
//! - `count` of a word equals the number of positions mapped to it.
//!
//! Both maps are ordered (`BTreeMap`), so the floating-point sum in `priority`
//! always adds terms in the same order and repeated scoring is bit-identical.

use crate::error::{Result, SearchError};
use crate::scoring::{
    min_covering_span, occ_attenuation, position_bonus, proximity_bonus, WeightConfig,
};
use crate::types::{Article, FieldKind, Position};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// How repeated matches of one word combine their addweights.
///
/// `Max` keeps "the best field this word was found in" and is the default.
/// `Last` is not monotonic: a later body hit can lower a title word's weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddweightPolicy {
    #[default]
    Max,
    Sum,
    Last,
}

impl AddweightPolicy {
    pub fn combine(self, existing: u32, new: u32) -> u32 {
        match self {
            AddweightPolicy::Max => existing.max(new),
            AddweightPolicy::Sum => existing.saturating_add(new),
            AddweightPolicy::Last => new,
        }
    }
}

impl FromStr for AddweightPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(AddweightPolicy::Max),
            "sum" => Ok(AddweightPolicy::Sum),
            "last" => Ok(AddweightPolicy::Last),
            other => Err(format!("unknown addweight policy '{}' (max, sum, last)", other)),
        }
    }
}

impl fmt::Display for AddweightPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddweightPolicy::Max => "max",
            AddweightPolicy::Sum => "sum",
            AddweightPolicy::Last => "last",
        };
        f.write_str(name)
    }
}

/// Evidence for one query word within one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvidence {
    count: u32,
    addweight: u32,
    in_title: bool,
    first_position: Position,
    query_frequency: u32,
}

impl MatchEvidence {
    fn new(position: Position, addweight: u32) -> Self {
        Self {
            count: 1,
            addweight,
            in_title: is_title_addweight(addweight),
            first_position: position,
            query_frequency: 1,
        }
    }

    /// Occurrences of this word in the article.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Combined addweight under the result's policy.
    pub fn addweight(&self) -> u32 {
        self.addweight
    }

    /// Whether any occurrence was recorded with the title addweight.
    ///
    /// Sticky: unlike `addweight`, no policy can clear it.
    pub fn in_title(&self) -> bool {
        self.in_title
    }

    /// Earliest recorded position.
    pub fn first_position(&self) -> Position {
        self.first_position
    }

    /// How many times the word appeared in the query. At least 1.
    pub fn query_frequency(&self) -> u32 {
        self.query_frequency
    }
}

#[inline]
fn is_title_addweight(addweight: u32) -> bool {
    addweight >= FieldKind::Title.addweight()
}

/// Match evidence for one article, still accumulating.
#[derive(Debug, Clone)]
pub struct SearchResult {
    article: Arc<Article>,
    preset_priority: f64,
    policy: AddweightPolicy,
    words: BTreeMap<String, MatchEvidence>,
    positions: BTreeMap<Position, String>,
}

impl SearchResult {
    pub fn new(article: Arc<Article>) -> Self {
        Self::with_priority(article, 0.0)
    }

    /// Start from a preset priority. It stands until the first `found_word`;
    /// from then on the priority is computed from evidence.
    pub fn with_priority(article: Arc<Article>, priority: f64) -> Self {
        Self {
            article,
            preset_priority: priority,
            policy: AddweightPolicy::default(),
            words: BTreeMap::new(),
            positions: BTreeMap::new(),
        }
    }

    pub fn with_policy(mut self, policy: AddweightPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record one occurrence of `word` at `position`.
    ///
    /// Fails with `InvariantViolation` if `position` is already taken, whether
    /// by the same word or another. Nothing is recorded in that case.
    pub fn found_word(&mut self, word: &str, position: Position, addweight: u32) -> Result<()> {
        if let Some(existing) = self.positions.get(&position) {
            return Err(SearchError::InvariantViolation {
                article: self.article.id,
                position,
                existing: existing.clone(),
                word: word.to_string(),
            });
        }

        match self.words.get_mut(word) {
            Some(evidence) => {
                evidence.count += 1;
                evidence.addweight = self.policy.combine(evidence.addweight, addweight);
                evidence.in_title |= is_title_addweight(addweight);
                evidence.first_position = evidence.first_position.min(position);
            }
            None => {
                self.words
                    .insert(word.to_string(), MatchEvidence::new(position, addweight));
            }
        }
        self.positions.insert(position, word.to_string());
        Ok(())
    }

    /// Mark `word` as asked `frequency` times by the query. Its occurrence
    /// term is multiplied accordingly. No effect if the word never matched.
    pub fn reinforce(&mut self, word: &str, frequency: u32) {
        if let Some(evidence) = self.words.get_mut(word) {
            evidence.query_frequency = frequency.max(1);
        }
    }

    pub fn article(&self) -> &Arc<Article> {
        &self.article
    }

    pub fn policy(&self) -> AddweightPolicy {
        self.policy
    }

    /// Number of distinct query words matched.
    pub fn count_words(&self) -> usize {
        self.words.len()
    }

    /// Number of occurrences recorded.
    pub fn count_positions(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn evidence(&self, word: &str) -> Option<&MatchEvidence> {
        self.words.get(word)
    }

    /// Matched words with their evidence, in word order.
    pub fn words(&self) -> impl Iterator<Item = (&str, &MatchEvidence)> + '_ {
        self.words.iter().map(|(w, e)| (w.as_str(), e))
    }

    /// Occurrences in document order.
    pub fn positions(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.positions.iter().map(|(p, w)| (*p, w.as_str()))
    }

    /// Smallest window holding one occurrence of every matched word.
    pub fn covering_span(&self) -> Option<Position> {
        let slots: HashMap<&str, usize> = self
            .words
            .keys()
            .enumerate()
            .map(|(slot, word)| (word.as_str(), slot))
            .collect();
        let occurrences: Vec<(Position, usize)> = self
            .positions
            .iter()
            .map(|(pos, word)| (*pos, slots[word.as_str()]))
            .collect();
        min_covering_span(&occurrences, self.words.len())
    }

    /// Priority under `weights`.
    ///
    /// ```text
    /// Σ_w  occurrence · att(count_w, occurrenceOffset) · addweight_w · (title if w in title else 1) · qf_w
    ///    + position · pos_bonus(first_w)
    /// + distinctWords · |words|
    /// + plus · [|words| > 1]
    /// + distance · prox_bonus(covering span)
    /// ```
    ///
    /// Pure: calling it twice without an intervening `found_word` returns the
    /// same bits.
    pub fn priority(&self, weights: &WeightConfig) -> f64 {
        if self.words.is_empty() {
            return self.preset_priority;
        }

        let mut priority = 0.0;
        for evidence in self.words.values() {
            let title = if evidence.in_title { weights.title } else { 1.0 };
            priority += weights.occurrence
                * occ_attenuation(evidence.count, weights.occurrence_offset)
                * f64::from(evidence.addweight)
                * title
                * f64::from(evidence.query_frequency);
            priority += weights.position * position_bonus(evidence.first_position);
        }

        let distinct = self.words.len();
        priority += weights.distinct_words * distinct as f64;
        if distinct > 1 {
            priority += weights.plus;
        }
        priority += weights.distance * proximity_bonus(self.covering_span());

        priority
    }

    /// Score once and freeze.
    pub fn finalize(self, weights: &WeightConfig) -> ScoredResult {
        let priority = self.priority(weights);
        ScoredResult {
            count_words: self.words.len(),
            count_positions: self.positions.len(),
            matched_words: self.words.into_keys().collect(),
            article: self.article,
            priority,
        }
    }
}

/// Match evidence for one article, scored and immutable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    article: Arc<Article>,
    priority: f64,
    count_words: usize,
    count_positions: usize,
    matched_words: Vec<String>,
}

impl ScoredResult {
    pub fn article(&self) -> &Arc<Article> {
        &self.article
    }

    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub fn count_words(&self) -> usize {
        self.count_words
    }

    pub fn count_positions(&self) -> usize {
        self.count_positions
    }

    /// Distinct matched query words, sorted.
    pub fn matched_words(&self) -> &[String] {
        &self.matched_words
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        article: Arc<Article>,
        priority: f64,
        count_words: usize,
        count_positions: usize,
    ) -> Self {
        Self {
            article,
            priority,
            count_words,
            count_positions,
            matched_words: Vec::new(),
        }
    }
}
