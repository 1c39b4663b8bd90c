// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: query in, ranked `Results` out.
//!
//! ```text
//! expr ──tokenize──▶ words ──postings──▶ (article, position, field)
//!                                              │
//!                        found_word per occurrence, one SearchResult per article
//!                                              ▼
//!                 finalize with one weight snapshot ──rank──▶ Results
//! ```
//!
//! The article → result lookup lives only for one `search()` call. Nothing is
//! cached on the engine between queries except the current weights.
//!
//! # Weights
//!
//! The engine stores its weights as an `Arc<WeightConfig>` behind a lock and
//! replaces it whole on `set_weights`. A search clones the `Arc` once on entry,
//! so a tune that lands mid-search only affects searches started afterwards.
//! `search_with` skips the engine's weights entirely.

use crate::error::Result;
use crate::index::{ArticleStore, WordIndex};
use crate::scoring::ranking::rank;
use crate::scoring::WeightConfig;
use crate::search::{AddweightPolicy, Results, ScoredResult, SearchResult};
use crate::tokenize::{Tokenizer, WordTokenizer};
use crate::types::ArticleId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct Search<I, S> {
    index: I,
    store: S,
    tokenizer: Box<dyn Tokenizer>,
    weights: RwLock<Arc<WeightConfig>>,
    policy: AddweightPolicy,
}

impl<I: WordIndex, S: ArticleStore> Search<I, S> {
    pub fn new(index: I, store: S) -> Self {
        Self {
            index,
            store,
            tokenizer: Box::new(WordTokenizer::new()),
            weights: RwLock::new(Arc::new(WeightConfig::default())),
            policy: AddweightPolicy::default(),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn with_weights(self, weights: WeightConfig) -> Self {
        self.set_weights(weights);
        self
    }

    pub fn with_policy(mut self, policy: AddweightPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current weight snapshot.
    pub fn weights(&self) -> Arc<WeightConfig> {
        self.weights.read().clone()
    }

    /// Replace the weights for every search that starts after this call.
    pub fn set_weights(&self, weights: WeightConfig) {
        *self.weights.write() = Arc::new(weights);
    }

    /// Read-modify-write the weights under one write lock.
    pub fn update_weights(&self, update: impl FnOnce(&mut WeightConfig)) {
        let mut guard = self.weights.write();
        let mut next = **guard;
        update(&mut next);
        *guard = Arc::new(next);
    }

    pub fn policy(&self) -> AddweightPolicy {
        self.policy
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rank articles for `expr` under the engine's current weights.
    pub fn search(&self, expr: &str) -> Result<Results> {
        let weights = self.weights();
        self.search_with(expr, &weights)
    }

    /// Rank articles for `expr` under explicit weights.
    ///
    /// An expression without words yields empty `Results`. A word without
    /// postings contributes nothing. A duplicate position, or any collaborator
    /// error, aborts the search and is returned as is.
    ///
    /// A word repeated in the query is looked up once and reinforces its own
    /// evidence: its occurrence term is multiplied by the repeat count.
    /// Resolving it again would report every position a second time.
    pub fn search_with(&self, expr: &str, weights: &WeightConfig) -> Result<Results> {
        let words = query_words(self.tokenizer.words(expr));
        tracing::debug!(expr, words = words.len(), "search");

        let mut accumulator = Accumulator::new(self.policy);
        for (word, frequency) in &words {
            let postings = self.index.postings(word)?;
            tracing::trace!(word = word.as_str(), postings = postings.len(), "resolved");

            for posting in postings {
                let result = accumulator.entry(posting.article, &self.store)?;
                if let Err(e) = result.found_word(word, posting.position, posting.field.addweight()) {
                    tracing::warn!(error = %e, "aborting search on corrupt index data");
                    return Err(e);
                }
            }
            if *frequency > 1 {
                accumulator.reinforce(word, *frequency);
            }
        }

        let results = accumulator.into_ranked(weights);
        tracing::debug!(expr, results = results.len(), "ranked");
        Ok(Results::from_ranked(expr, results))
    }
}

/// Distinct query words with their repeat counts, in first-seen order.
fn query_words(words: Vec<String>) -> Vec<(String, u32)> {
    let mut grouped: Vec<(String, u32)> = Vec::with_capacity(words.len());
    for word in words {
        match grouped.iter_mut().find(|(w, _)| *w == word) {
            Some((_, frequency)) => *frequency += 1,
            None => grouped.push((word, 1)),
        }
    }
    grouped
}

/// Per-search lookup from article to its accumulating result.
///
/// Keeps discovery order so the final stable sort has a deterministic
/// fallback for full ties.
struct Accumulator {
    policy: AddweightPolicy,
    slots: HashMap<ArticleId, usize>,
    results: Vec<SearchResult>,
}

impl Accumulator {
    fn new(policy: AddweightPolicy) -> Self {
        Self {
            policy,
            slots: HashMap::new(),
            results: Vec::new(),
        }
    }

    fn entry(&mut self, id: ArticleId, store: &impl ArticleStore) -> Result<&mut SearchResult> {
        let slot = match self.slots.get(&id) {
            Some(&slot) => slot,
            None => {
                let article = store.article(id)?;
                self.results
                    .push(SearchResult::new(article).with_policy(self.policy));
                let slot = self.results.len() - 1;
                self.slots.insert(id, slot);
                slot
            }
        };
        Ok(&mut self.results[slot])
    }

    fn reinforce(&mut self, word: &str, frequency: u32) {
        for result in &mut self.results {
            result.reinforce(word, frequency);
        }
    }

    fn into_ranked(self, weights: &WeightConfig) -> Vec<ScoredResult> {
        let mut scored: Vec<ScoredResult> = self
            .results
            .into_iter()
            .map(|result| result.finalize(weights))
            .collect();
        rank(&mut scored);
        scored
    }
}
