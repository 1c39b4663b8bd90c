// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for ranked results.
//!
//! Cells are padded as plain text first and colored afterwards, so escape
//! codes never count toward column widths.

use zeno::{Results, ScoredResult};

const RESET: &str = "\x1b[0m";
const HEADER: &str = "\x1b[1;36m";
const FAINT: &str = "\x1b[2m";
const STRONG_MATCH: &str = "\x1b[32m";
const FAIR_MATCH: &str = "\x1b[33m";
const WEAK_MATCH: &str = "\x1b[90m";

const TITLE_WIDTH: usize = 60;

/// Whether output gets ANSI colors, decided once per run.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colors on a terminal, unless `NO_COLOR` is set.
    pub fn detect() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout),
        }
    }

    #[cfg(test)]
    fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Color for a priority, judged against the best priority of the query.
fn match_strength(priority: f64, best: f64) -> &'static str {
    if best <= 0.0 || priority >= best * 0.75 {
        STRONG_MATCH
    } else if priority >= best * 0.4 {
        FAIR_MATCH
    } else {
        WEAK_MATCH
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "…"
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn result_row(palette: Palette, rank: usize, result: &ScoredResult, best: f64) -> String {
    let priority = format!("{:>9.2}", result.priority());
    format!(
        "{:>4} {} {:>5} {:>5}  {}",
        rank,
        palette.paint(match_strength(result.priority(), best), &priority),
        result.count_words(),
        result.count_positions(),
        truncate_text(result.article().title(), TITLE_WIDTH),
    )
}

/// Render ranked results as a table, one line per result.
pub fn render_results(results: &Results, palette: Palette) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        palette.paint(HEADER, "query:"),
        results.expression()
    )];
    if results.is_empty() {
        lines.push(palette.paint(FAINT, "no matches"));
        return lines;
    }

    lines.push(palette.paint(FAINT, "rank  priority words   occ  title"));
    let best = results.first().map_or(0.0, |r| r.priority());
    lines.extend(
        results
            .iter()
            .enumerate()
            .map(|(i, result)| result_row(palette, i + 1, result, best)),
    );
    lines
}

pub fn print_results(results: &Results) {
    for line in render_results(results, Palette::detect()) {
        println!("{line}");
    }
}
