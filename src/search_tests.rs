//! End-to-end properties of the search paths over generated corpora.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use super::*;
use crate::snippet::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, SPACE_ENTITY};

fn strip_markup(s: &str) -> String {
    s.replace(HIGHLIGHT_OPEN, "")
        .replace(HIGHLIGHT_CLOSE, "")
        .replace(SPACE_ENTITY, " ")
}

/// Lines built from a tiny vocabulary so words collide often.
fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::collection::vec(prop_oneof!["ab", "ba", "cab", "bc", "Ab", "c"], 0..6)
            .prop_map(|words| words.join(" ")),
        1..25,
    )
}

fn target_index(result: &SearchResult) -> Option<usize> {
    result
        .lines_text
        .iter()
        .position(|l| l.contains(HIGHLIGHT_OPEN))
        .map(|pos| result.from_line - 1 + pos)
}

/// Every page for the query, concatenated.
fn all_pages(corpus: &Corpus, query: &str, limit: usize) -> (usize, Vec<SearchResult>) {
    let mut results = Vec::new();
    let mut total = 0;
    for page in 1.. {
        let response = corpus.search(query, limit, page);
        if response.search_results.is_empty() {
            break;
        }
        assert!(response.page_quantity <= limit);
        assert_eq!(response.page_quantity, response.search_results.len());
        total = response.total_quantity;
        results.extend(response.search_results);
    }
    (total, results)
}

proptest! {
    /// Stripping markup from the target line gives back the original line text.
    #[test]
    fn highlight_round_trip(lines in corpus_strategy(), query in prop_oneof!["ab", "b c", "ca", "a"]) {
        let corpus = Corpus::from_text(lines.join("\r\n"));
        let response = corpus.search(&query, 1000, 1);
        for result in &response.search_results {
            for (i, text) in result.lines_text.iter().enumerate() {
                let original = &corpus.lines().get(result.from_line - 1 + i).unwrap().text;
                prop_assert_eq!(&strip_markup(text), original);
            }
        }
    }

    /// Page quantities across consecutive pages add up to the total.
    #[test]
    fn pages_sum_to_total(lines in corpus_strategy(), limit in 1usize..7) {
        let corpus = Corpus::from_text(lines.join("\r\n"));
        let (total, results) = all_pages(&corpus, "ab", limit);
        prop_assert_eq!(results.len(), total);
        prop_assert_eq!(total, corpus.lookup("ab").len());
    }

    /// Asking beyond the last page is an empty, successful response.
    #[test]
    fn page_beyond_range_is_empty(lines in corpus_strategy(), limit in 1usize..5) {
        let corpus = Corpus::from_text(lines.join("\r\n"));
        let total = corpus.search("ab", limit, 1).total_quantity;
        let past = total / limit + 1 + usize::from(total % limit != 0);
        prop_assert_eq!(corpus.search("ab", limit, past), Response::default());
    }

    /// Intersection returns exactly the lines holding every word, each once.
    #[test]
    fn intersection_sound_and_complete(lines in corpus_strategy()) {
        let corpus = Corpus::from_text(lines.join("\r\n"));
        let words = ["bc", "cab"];
        let query = words.join(" ");
        let response = multi_words(&corpus, &query, PageRequest::new(1, usize::MAX));

        let got: Vec<usize> = response.search_results.iter().filter_map(target_index).collect();
        let unique: HashSet<usize> = got.iter().copied().collect();
        prop_assert_eq!(unique.len(), got.len(), "duplicate line in {:?}", got);

        let expected: Vec<usize> = corpus
            .lines()
            .iter()
            .filter(|line| {
                let lower = fold_case(&line.text);
                words.iter().all(|w| lower.contains(w))
            })
            .map(|line| line.index)
            .collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(response.total_quantity, response.search_results.len());
    }
}

#[test]
fn test_concurrent_searches_are_isolated() {
    let corpus = Arc::new(Corpus::from_text(
        "alpha beta\r\ngamma delta\r\nalpha gamma\r\nbeta delta",
    ));
    let queries = ["alpha", "beta", "gamma", "delta", "alpha gamma", "beta delta"];

    let expected: Vec<Response> = queries.iter().map(|q| corpus.search(q, 20, 1)).collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            for (query, want) in queries.iter().zip(&expected) {
                let corpus = Arc::clone(&corpus);
                scope.spawn(move || {
                    for _ in 0..50 {
                        let got = corpus.search(query, 20, 1);
                        assert_eq!(&got, want, "query '{}' saw foreign state", query);
                        for result in &got.search_results {
                            for line in &result.lines_text {
                                let marked: Vec<String> = line
                                    .split(HIGHLIGHT_OPEN)
                                    .skip(1)
                                    .filter_map(|s| s.split(HIGHLIGHT_CLOSE).next())
                                    .map(|s| s.replace(SPACE_ENTITY, " "))
                                    .collect();
                                for m in &marked {
                                    let own = query.eq_ignore_ascii_case(m)
                                        || query.split_whitespace().any(|w| w.eq_ignore_ascii_case(m));
                                    assert!(own, "query '{}' highlighted '{}'", query, m);
                                }
                            }
                        }
                    }
                });
            }
        }
    });

    // Shared line table still holds plain text
    for line in corpus.lines().iter() {
        assert!(!line.text.contains(HIGHLIGHT_OPEN));
    }
}

#[test]
fn test_search_does_not_mutate_line_table() {
    let corpus = Corpus::from_text("to be or not to be\r\nthat is the question");
    let before: Vec<Line> = corpus.lines().iter().cloned().collect();
    let _ = corpus.search("to be", 20, 1);
    let _ = corpus.search("is question", 20, 1);
    let after: Vec<Line> = corpus.lines().iter().cloned().collect();
    assert_eq!(before, after);
}
