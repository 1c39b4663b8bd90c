// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored results get sorted.
//!
//! Priority decides. When two priorities are equal, the result that matched
//! more distinct query words goes first, then the one with more occurrences.
//! Anything still tied keeps discovery order, which is why callers must sort
//! with a stable sort.

use crate::search::ScoredResult;
use std::cmp::Ordering;

/// Compare two scored results for ranking.
///
/// Sort order:
/// 1. **Priority** - descending
/// 2. **Distinct words matched** - descending
/// 3. **Occurrences recorded** - descending
///
/// Returns `Equal` for a full tie. `f64::total_cmp` keeps the order total even
/// if a pathological weight set produces NaN.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.priority()
        .total_cmp(&a.priority())
        .then_with(|| b.count_words().cmp(&a.count_words()))
        .then_with(|| b.count_positions().cmp(&a.count_positions()))
}

/// Stable sort into ranking order.
pub fn rank(results: &mut [ScoredResult]) {
    results.sort_by(compare_results);
}
