// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A priority mixes five signals: attenuated occurrence counts (boosted for
//! title hits), how early each word first appears, how many distinct query
//! words matched, whether more than one did, and how tightly the matched words
//! cluster. `weights` holds the knobs, `core` the curves, `ranking` the order.

mod core;
pub mod ranking;
pub mod weights;

pub use self::core::*;
pub use weights::WeightConfig;
