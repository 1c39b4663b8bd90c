// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The seven tuning knobs of the priority formula.
//!
//! A `WeightConfig` is a plain value. There is no process-wide copy: the engine
//! holds the current one behind an `Arc` and swaps it whole, and every search
//! reads exactly one snapshot from start to finish. Tuning therefore affects
//! all scoring that starts after the change and nothing already in flight.
//!
//! No cross-validation is done. Zero and negative weights are accepted; the
//! monotonicity guarantees of the formula only hold for non-negative ones.
//!
//! # JSON
//!
//! ```json
//! {
//!   "title": 4.0,
//!   "occurrence": 10.0,
//!   "occurrenceOffset": 1.0,
//!   "plus": 10.0,
//!   "distance": 10.0,
//!   "position": 2.0,
//!   "distinctWords": 50.0
//! }
//! ```
//!
//! Every key is optional; missing keys keep their default.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Multiplier applied to a word's occurrence term when it was found in a title.
pub const DEFAULT_WEIGHT_TITLE: f64 = 4.0;

/// Scale of the attenuated occurrence term.
pub const DEFAULT_WEIGHT_OCC: f64 = 10.0;

/// Offset in `count / (count + offset)`. Larger values flatten the curve.
pub const DEFAULT_WEIGHT_OCC_OFF: f64 = 1.0;

/// Flat bonus once more than one distinct query word matched.
pub const DEFAULT_WEIGHT_PLUS: f64 = 10.0;

/// Scale of the proximity bonus.
pub const DEFAULT_WEIGHT_DIST: f64 = 10.0;

/// Scale of the per-word position bonus.
pub const DEFAULT_WEIGHT_POS: f64 = 2.0;

/// Bonus per distinct matched query word.
pub const DEFAULT_WEIGHT_DISTINCT_WORDS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightConfig {
    pub title: f64,
    pub occurrence: f64,
    pub occurrence_offset: f64,
    pub plus: f64,
    pub distance: f64,
    pub position: f64,
    pub distinct_words: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WEIGHT_TITLE,
            occurrence: DEFAULT_WEIGHT_OCC,
            occurrence_offset: DEFAULT_WEIGHT_OCC_OFF,
            plus: DEFAULT_WEIGHT_PLUS,
            distance: DEFAULT_WEIGHT_DIST,
            position: DEFAULT_WEIGHT_POS,
            distinct_words: DEFAULT_WEIGHT_DISTINCT_WORDS,
        }
    }
}

impl WeightConfig {
    /// All seven weights set to zero. Handy as a base for isolating one term.
    pub fn zeroed() -> Self {
        Self {
            title: 0.0,
            occurrence: 0.0,
            occurrence_offset: 0.0,
            plus: 0.0,
            distance: 0.0,
            position: 0.0,
            distinct_words: 0.0,
        }
    }

    pub fn with_title(mut self, v: f64) -> Self {
        self.title = v;
        self
    }

    pub fn with_occurrence(mut self, v: f64) -> Self {
        self.occurrence = v;
        self
    }

    pub fn with_occurrence_offset(mut self, v: f64) -> Self {
        self.occurrence_offset = v;
        self
    }

    pub fn with_plus(mut self, v: f64) -> Self {
        self.plus = v;
        self
    }

    pub fn with_distance(mut self, v: f64) -> Self {
        self.distance = v;
        self
    }

    pub fn with_position(mut self, v: f64) -> Self {
        self.position = v;
        self
    }

    pub fn with_distinct_words(mut self, v: f64) -> Self {
        self.distinct_words = v;
        self
    }

    /// Parse a (possibly partial) JSON weight document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON weight document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
