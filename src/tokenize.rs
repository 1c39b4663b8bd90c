// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting text into query words.
//!
//! The same tokenizer runs on both sides: over article text when an in-memory
//! index is built, and over the query expression at search time. If the two
//! sides normalized differently, "Café" in a title would never match "cafe" in
//! a query.
//!
//! Tokens carry their word ordinal. Stop words are dropped but still consume an
//! ordinal, so distances between the surviving words stay honest.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Multilingual stop words loaded from data/stop_words.json.
static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let json_str = include_str!("../data/stop_words.json");
    parse_stop_words_json(json_str)
});

/// Flatten `{ "lang": ["word", ...], ... }` into one normalized set.
fn parse_stop_words_json(json_str: &str) -> HashSet<String> {
    let by_lang: HashMap<String, Vec<String>> = match serde_json::from_str(json_str) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("stop word list unreadable, filtering disabled: {}", e);
            return HashSet::new();
        }
    };
    by_lang
        .into_values()
        .flatten()
        .map(|word| normalize(&word))
        .filter(|word| !word.is_empty())
        .collect()
}

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Normalize a word for matching: strip diacritics, lowercase.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only; assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) left behind by NFD.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// One word of a text with its ordinal among all words of that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub ordinal: u32,
}

/// Turns text into normalized words.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Just the words, duplicates and order preserved.
    fn words(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.word).collect()
    }
}

/// Splits on non-alphanumeric characters, normalizes, drops stop words.
#[derive(Debug, Clone, Copy)]
pub struct WordTokenizer {
    filter_stop_words: bool,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self {
            filter_stop_words: true,
        }
    }
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep stop words as ordinary tokens.
    pub fn keep_stop_words(mut self) -> Self {
        self.filter_stop_words = false;
        self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|raw| !raw.is_empty())
            .enumerate()
            .filter_map(|(ordinal, raw)| {
                let word = normalize(raw);
                if word.is_empty() || (self.filter_stop_words && is_stop_word(&word)) {
                    return None;
                }
                Some(Token {
                    word,
                    ordinal: ordinal as u32,
                })
            })
            .collect()
    }
}
