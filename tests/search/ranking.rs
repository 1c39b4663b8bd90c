//! Ranking order: priority first, then matched words, then occurrences.

use super::common::{memory_search, raw_engine, titles};
use zeno::{compare_results, Article, FieldKind, WeightConfig};
use std::cmp::Ordering;

// ============================================================================
// PRIORITY ORDER
// ============================================================================

#[test]
fn test_results_sorted_by_priority_descending() {
    let engine = memory_search(super::common::sample_articles());
    for query in ["fox", "quick fox", "bear wolf fox", "sort"] {
        let results = engine.search(query).unwrap();
        for pair in results.windows(2) {
            assert!(
                pair[0].priority() >= pair[1].priority(),
                "{}: {} < {}",
                query,
                pair[0].priority(),
                pair[1].priority()
            );
            assert_ne!(compare_results(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}

#[test]
fn test_title_occurrence_outranks_body_occurrence() {
    let engine = raw_engine(
        &[(0, "Body"), (1, "Title")],
        &[
            ("wolf", 0, 0, FieldKind::Body),
            ("wolf", 1, 0, FieldKind::Title),
        ],
    );
    let results = engine.search("wolf").unwrap();
    assert_eq!(titles(&results), vec!["Title", "Body"]);
}

#[test]
fn test_two_distinct_words_beat_one_word_twice() {
    let engine = raw_engine(
        &[(0, "Twice"), (1, "Both")],
        &[
            ("fox", 0, 5, FieldKind::Body),
            ("fox", 0, 6, FieldKind::Body),
            ("quick", 1, 5, FieldKind::Body),
            ("fox", 1, 6, FieldKind::Body),
        ],
    );
    let results = engine.search("quick fox").unwrap();
    assert_eq!(titles(&results), vec!["Both", "Twice"]);
    assert_eq!(results[0].count_words(), 2);
    assert_eq!(results[1].count_words(), 1);
    assert_eq!(results[1].count_positions(), 2);
}

// ============================================================================
// TIE-BREAKING
// ============================================================================

#[test]
fn test_zero_weights_fall_back_to_counts() {
    let engine = memory_search(vec![
        Article::new(0, "Alpha", "fox"),
        Article::new(1, "Beta", "fox wolf"),
        Article::new(2, "Gamma", "fox fox"),
    ]);
    engine.set_weights(WeightConfig::zeroed());

    let results = engine.search("fox wolf").unwrap();
    assert!(results.iter().all(|r| r.priority() == 0.0));
    // More words first, then more occurrences, then discovery order
    assert_eq!(titles(&results), vec!["Beta", "Gamma", "Alpha"]);
}

#[test]
fn test_full_ties_keep_discovery_order() {
    let engine = memory_search(vec![
        Article::new(7, "Seven", "fox"),
        Article::new(3, "Three", "fox"),
        Article::new(5, "Five", "fox"),
    ]);
    let results = engine.search("fox").unwrap();
    assert_eq!(results[0].priority(), results[2].priority());
    // Postings are sorted by article id, so ids are discovered ascending
    assert_eq!(titles(&results), vec!["Three", "Five", "Seven"]);
}

// ============================================================================
// WEIGHT SENSITIVITY
// ============================================================================

#[test]
fn test_title_weight_reorders_results() {
    let articles = &[(0, "Title"), (1, "Body")];
    let postings = &[
        ("bear", 0, 40, FieldKind::Title),
        ("bear", 1, 1, FieldKind::Body),
        ("bear", 1, 2, FieldKind::Body),
        ("bear", 1, 3, FieldKind::Body),
    ];

    let boosted = raw_engine(articles, postings).search("bear").unwrap();
    assert_eq!(titles(&boosted), vec!["Title", "Body"]);

    // Title weight of 1 still leaves the field addweight, so drop occurrence
    // and let position decide.
    let flat = raw_engine(articles, postings)
        .with_weights(WeightConfig::default().with_title(1.0).with_occurrence(0.0));
    let results = flat.search("bear").unwrap();
    assert_eq!(titles(&results), vec!["Body", "Title"]);
}
