//! Snippet builder: context window around a matched line, with highlighting.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::lines::{Line, LineTable};
use crate::{QueryMark, SearchResult};

/// Lines of context shown before and after the matched line.
pub const CONTEXT_LINES: usize = 2;

pub const HIGHLIGHT_OPEN: &str = "<b>";
pub const HIGHLIGHT_CLOSE: &str = "</b>";

/// Replacement for a literal space so HTML clients keep the whitespace.
pub const SPACE_ENTITY: &str = "&nbsp;";

/// Request-local annotations: line index → marks matched on that line.
///
/// Created per search call and dropped with it; never stored in the line table.
pub type Annotations = HashMap<usize, Vec<QueryMark>>;

/// Build the `±CONTEXT_LINES` window around `target`, highlighting the target line.
pub fn build_search_result(lines: &LineTable, target: usize, annotations: &Annotations) -> SearchResult {
    let from = target.saturating_sub(CONTEXT_LINES);
    let to = target.saturating_add(CONTEXT_LINES).min(lines.last_index());

    let lines_text = (from..=to)
        .filter_map(|i| lines.get(i))
        .map(|line| {
            if line.index == target {
                let marks = annotations.get(&target).map_or(&[][..], Vec::as_slice);
                highlight_line(line, marks)
            } else {
                escape_spaces(&line.text)
            }
        })
        .collect();

    SearchResult {
        lines_text,
        from_line: from + 1,
        to_line: to + 1,
    }
}

/// Comparator for highlight order: process the highest offset first.
///
/// Inserting markup lengthens the string, so spans further right must be
/// wrapped before spans to their left.
pub fn highest_offset_first(a: &QueryMark, b: &QueryMark) -> Ordering {
    b.offset.cmp(&a.offset)
}

/// Wrap every marked span of `line` in `<b>…</b>`, then escape spaces.
///
/// Marks are applied in descending offset order. A mark running past the end
/// of the line (a literal match spanning the terminator) is cut at the line
/// end; overlapping marks are merged into one span.
pub fn highlight_line(line: &Line, marks: &[QueryMark]) -> String {
    let mut ordered = marks.to_vec();
    ordered.sort_by(highest_offset_first);

    let mut text = line.text.clone();
    for (start, end) in merged_spans(line, &ordered) {
        text.insert_str(end, HIGHLIGHT_CLOSE);
        text.insert_str(start, HIGHLIGHT_OPEN);
    }
    escape_spaces(&text)
}

pub fn escape_spaces(text: &str) -> String {
    text.replace(' ', SPACE_ENTITY)
}

/// Line-relative `(start, end)` spans for marks already sorted highest offset first.
/// Output is non-overlapping and in descending order.
fn merged_spans(line: &Line, ordered: &[QueryMark]) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::with_capacity(ordered.len());
    for mark in ordered {
        let Some(start) = mark.offset.checked_sub(line.from) else {
            continue;
        };
        if start >= line.len() {
            continue;
        }
        let end = start.saturating_add(mark.text.len()).min(line.len());
        if !line.text.is_char_boundary(start) || !line.text.is_char_boundary(end) {
            continue;
        }
        let mut span = (start, end);
        while let Some(&(last_start, last_end)) = spans.last() {
            if span.1 <= last_start {
                break;
            }
            span.1 = span.1.max(last_end);
            spans.pop();
        }
        spans.push(span);
    }
    spans
}
