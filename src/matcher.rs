//! Search paths: full (literal) match and the multi-word intersection fallback.

use tracing::debug;

use crate::corpus::Corpus;
use crate::page::PageRequest;
use crate::snippet::{build_search_result, Annotations};
use crate::{QueryMark, Response};

/// Answer a query: the literal match wins; word intersection only runs when
/// the whole query occurs nowhere in the corpus.
pub fn search(corpus: &Corpus, query: &str, page: PageRequest) -> Response {
    if query.is_empty() {
        return Response::default();
    }
    match full_match(corpus, query, page) {
        Some(response) => response,
        None => {
            debug!(query, "No literal match, trying word intersection");
            multi_words(corpus, query, page)
        }
    }
}

/// Treat the whole query as one literal substring.
///
/// Returns `None` when the query does not occur at all (so the caller may
/// fall back); a page beyond the last match yields the zero-value response.
/// A match starting inside a `\r\n` terminator still counts, but its target
/// line carries no highlight.
pub fn full_match(corpus: &Corpus, query: &str, page: PageRequest) -> Option<Response> {
    if query.is_empty() {
        return None;
    }
    let mut offsets = corpus.lookup(query);
    if offsets.is_empty() {
        return None;
    }
    offsets.sort_unstable();

    let Some(window) = page.window(offsets.len()) else {
        return Some(Response::default());
    };

    let lines = corpus.lines();
    let mut search_results = Vec::with_capacity(window.len());
    for &offset in &offsets[window] {
        let Some(line) = lines.resolve(offset) else {
            continue;
        };
        // Fresh per match: two hits on one line are two results, each with its own highlight
        let mut annotations = Annotations::new();
        annotations
            .entry(line.index)
            .or_default()
            .push(QueryMark::new(query, offset));
        search_results.push(build_search_result(lines, line.index, &annotations));
    }

    debug!(query, total = offsets.len(), page = page.page, "Full match");
    Some(Response {
        total_quantity: offsets.len(),
        page_quantity: search_results.len(),
        search_results,
    })
}

/// Lines containing every whitespace-separated word of the query, anywhere and in any order.
///
/// Queries with fewer than two words yield the zero-value response.
pub fn multi_words(corpus: &Corpus, query: &str, page: PageRequest) -> Response {
    let words: Vec<&str> = query.split_whitespace().collect();
    if words.len() < 2 {
        return Response::default();
    }

    let lines = corpus.lines();

    // Per word: (line index, offset) for every occurrence, in document order
    let mut hits_per_word: Vec<Vec<(usize, usize)>> = Vec::with_capacity(words.len());
    let mut surviving: Option<Vec<usize>> = None;
    for word in &words {
        let mut offsets = corpus.lookup(word);
        offsets.sort_unstable();
        let hits: Vec<(usize, usize)> = offsets
            .into_iter()
            .filter_map(|offset| lines.resolve(offset).map(|line| (line.index, offset)))
            .collect();

        let word_lines = distinct_lines(&hits);
        let next = match surviving {
            None => word_lines,
            Some(current) => sorted_intersect(&current, &word_lines),
        };
        hits_per_word.push(hits);
        if next.is_empty() {
            debug!(query, word, "Word intersection emptied");
            return Response::default();
        }
        surviving = Some(next);
    }
    let surviving = surviving.unwrap_or_default();

    let Some(window) = page.window(surviving.len()) else {
        return Response::default();
    };
    let page_lines = &surviving[window];

    // Only lines shown on this page need their marks
    let mut annotations = Annotations::new();
    for (word, hits) in words.iter().zip(&hits_per_word) {
        for &(line_index, offset) in hits {
            if page_lines.binary_search(&line_index).is_ok() {
                annotations
                    .entry(line_index)
                    .or_default()
                    .push(QueryMark::new(*word, offset));
            }
        }
    }

    let search_results: Vec<_> = page_lines
        .iter()
        .map(|&line_index| build_search_result(lines, line_index, &annotations))
        .collect();

    debug!(query, words = words.len(), total = surviving.len(), page = page.page, "Word intersection");
    Response {
        total_quantity: surviving.len(),
        page_quantity: search_results.len(),
        search_results,
    }
}

/// Sorted, de-duplicated line indices of document-ordered hits.
fn distinct_lines(hits: &[(usize, usize)]) -> Vec<usize> {
    let mut out: Vec<usize> = hits.iter().map(|&(line, _)| line).collect();
    out.dedup();
    out
}

/// Merge-intersect two sorted slices. Returns sorted intersection.
pub(crate) fn sorted_intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => { result.push(a[i]); i += 1; j += 1; }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }
    result
}
