//! Engine-level properties over random corpora and queries.

use super::common::memory_search;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use zeno::{compare_results, Article, Tokenizer, WeightConfig, WordTokenizer};

const VOCABULARY: [&str; 8] = ["fox", "wolf", "bear", "quick", "red", "forest", "river", "stone"];

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(VOCABULARY.to_vec()).prop_map(str::to_string)
}

fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..max_words).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec((text_strategy(4), text_strategy(20)), 1..8).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (title, content))| Article::new(i as u32, title, content))
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|words| words.join(" "))
}

/// Occurrences of any query word in title and body, counted by the tokenizer.
fn expected_positions(article: &Article, query: &str) -> usize {
    let tokenizer = WordTokenizer::new();
    let wanted: HashSet<String> = tokenizer.words(query).into_iter().collect();
    tokenizer
        .words(article.title())
        .into_iter()
        .chain(tokenizer.words(article.content()))
        .filter(|w| wanted.contains(w))
        .count()
}

proptest! {
    /// Every article with at least one query word appears exactly once,
    /// with the occurrences the index holds for it.
    #[test]
    fn prop_one_result_per_matching_article(
        corpus in corpus_strategy(),
        query in query_strategy(),
    ) {
        let engine = memory_search(corpus.clone());
        let results = engine.search(&query).unwrap();

        let returned: Vec<u32> = results.iter().map(|r| r.article().id.get()).collect();
        let unique: HashSet<u32> = returned.iter().copied().collect();
        prop_assert_eq!(unique.len(), returned.len());

        for article in &corpus {
            let expected = expected_positions(article, &query);
            let found = results.iter().find(|r| r.article().id == article.id);
            match found {
                Some(result) => {
                    prop_assert!(result.count_words() >= 1);
                    prop_assert_eq!(result.count_positions(), expected);
                }
                None => prop_assert_eq!(expected, 0),
            }
        }
    }

    /// Results come out in ranking order.
    #[test]
    fn prop_results_are_ranked(
        corpus in corpus_strategy(),
        query in query_strategy(),
    ) {
        let results = memory_search(corpus).search(&query).unwrap();
        for pair in results.windows(2) {
            prop_assert_ne!(compare_results(&pair[0], &pair[1]), Ordering::Greater);
            prop_assert!(pair[0].priority() >= pair[1].priority());
        }
    }

    /// Same query, index and weights: identical results.
    #[test]
    fn prop_search_is_deterministic(
        corpus in corpus_strategy(),
        query in query_strategy(),
    ) {
        let engine = memory_search(corpus.clone());
        let first = engine.search(&query).unwrap();
        let second = engine.search(&query).unwrap();
        prop_assert_eq!(&first, &second);

        let rebuilt = memory_search(corpus).search(&query).unwrap();
        prop_assert_eq!(&first, &rebuilt);
        prop_assert_eq!(first.expression(), query.as_str());
    }

    /// Repeating the whole query never lowers any article's priority.
    #[test]
    fn prop_repeating_query_never_hurts(
        corpus in corpus_strategy(),
        query in query_strategy(),
    ) {
        let engine = memory_search(corpus);
        let once = engine.search(&query).unwrap();
        let twice = engine.search(&format!("{} {}", query, query)).unwrap();
        prop_assert_eq!(once.len(), twice.len());

        for result in once.iter() {
            let again = twice
                .iter()
                .find(|r| r.article().id == result.article().id)
                .unwrap();
            prop_assert!(again.priority() >= result.priority());
            prop_assert_eq!(again.count_positions(), result.count_positions());
        }
    }

    /// Zero weights leave only the count tie-breakers.
    #[test]
    fn prop_zero_weights_rank_by_counts(
        corpus in corpus_strategy(),
        query in query_strategy(),
    ) {
        let engine = memory_search(corpus);
        let results = engine.search_with(&query, &WeightConfig::zeroed()).unwrap();
        for pair in results.windows(2) {
            prop_assert_eq!(pair[0].priority(), 0.0);
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                (a.count_words(), a.count_positions()) >= (b.count_words(), b.count_positions())
            );
        }
    }
}
