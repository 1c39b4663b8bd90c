// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: from a query expression to ranked results.
//!
//! `result` holds per-article evidence, `results` the ranked answer, `engine`
//! the loop that ties postings, evidence and scoring together.

mod engine;
mod result;
mod results;

pub use engine::Search;
pub use result::{AddweightPolicy, MatchEvidence, ScoredResult, SearchResult};
pub use results::Results;
