// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a priority.
//!
//! Each function here is one signal of the formula assembled in
//! `SearchResult::priority`. Exact curves are tuning; what is fixed is their
//! shape:
//!
//! | Function           | Shape                                              |
//! |--------------------|----------------------------------------------------|
//! | `occ_attenuation`  | 0 at count 0, increasing, sub-linear               |
//! | `position_bonus`   | in `(0, 1]`, non-increasing in position            |
//! | `proximity_bonus`  | in `[0, 1]`, non-increasing in span, 0 below 2 words |
//!
//! With non-negative weights those shapes are what make the ranking laws hold:
//! more occurrences never hurt, earlier never hurts, closer never hurts.

use crate::types::Position;

/// Diminishing returns on repeated occurrences: `count / (count + offset)`.
///
/// With `offset <= 0` the curve collapses to a step: any occurrence scores 1.
pub fn occ_attenuation(count: u32, offset: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let count = f64::from(count);
    if offset <= 0.0 {
        1.0
    } else {
        count / (count + offset)
    }
}

/// Earlier occurrences score higher: `1 / (1 + ln(1 + pos))`.
///
/// Position 0 gets the full bonus of 1. The logarithm keeps the decay gentle,
/// so a word at position 200 still earns roughly a sixth of it.
pub fn position_bonus(pos: Position) -> f64 {
    1.0 / (1.0 + f64::from(pos).ln_1p())
}

/// Closer matched words score higher: `1 / span`.
///
/// `span` is `None` when fewer than two distinct words matched. Positions are
/// unique per article, so a real span is at least 1; a span of 0 is clamped.
pub fn proximity_bonus(span: Option<Position>) -> f64 {
    match span {
        Some(span) => 1.0 / f64::from(span.max(1)),
        None => 0.0,
    }
}

/// Smallest `last - first` over windows of `occurrences` containing at least
/// one occurrence of each of the `distinct` words.
///
/// `occurrences` is `(position, word_slot)` in ascending position order, with
/// `word_slot < distinct`. Returns `None` when `distinct < 2`.
///
/// When every word occurs exactly once this is the spread of the sorted
/// positions. Adding occurrences can only shrink it.
pub fn min_covering_span(occurrences: &[(Position, usize)], distinct: usize) -> Option<Position> {
    if distinct < 2 {
        return None;
    }

    let mut in_window = vec![0u32; distinct];
    let mut covered = 0usize;
    let mut best: Option<Position> = None;
    let mut left = 0usize;

    for (right, &(right_pos, slot)) in occurrences.iter().enumerate() {
        if in_window[slot] == 0 {
            covered += 1;
        }
        in_window[slot] += 1;

        // Shrink from the left while the window still covers every word
        while covered == distinct && left <= right {
            let (left_pos, left_slot) = occurrences[left];
            let span = right_pos - left_pos;
            best = Some(best.map_or(span, |b| b.min(span)));

            in_window[left_slot] -= 1;
            if in_window[left_slot] == 0 {
                covered -= 1;
            }
            left += 1;
        }
    }

    best
}
