//! # corpus-search — Static-Corpus Text Search Engine
//!
//! Loads a fixed body of text once, builds a case-insensitive suffix-array
//! index over it, and answers substring and multi-word queries with
//! paginated, highlighted context snippets.
//!
//! ## Library usage
//!
//! ```
//! use corpus_search::Corpus;
//!
//! let corpus = Corpus::from_text("to be or not to be\r\nthat is the question");
//! let response = corpus.search("to be", 20, 1);
//! assert_eq!(response.total_quantity, 2);
//! ```
//!
//! The corpus is immutable after construction; share it across threads with
//! `Arc<Corpus>`. All highlight state lives inside a single search call.

use serde::Serialize;

pub mod corpus;
pub mod error;
pub mod lines;
pub mod matcher;
pub mod page;
pub mod request;
pub mod snippet;
pub mod suffix;

pub use corpus::{fold_case, read_corpus_lossy, Corpus};
pub use error::SearchError;
pub use lines::{Line, LineTable, LINE_TERMINATOR};
pub use matcher::{full_match, multi_words};
pub use page::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use request::SearchRequest;
pub use snippet::{build_search_result, highlight_line, Annotations, CONTEXT_LINES};
pub use suffix::{build_suffix_array, SuffixIndex};

/// Corpus file read when none is configured.
pub const DEFAULT_CORPUS_PATH: &str = "completeworks.txt";

// ─── Core public types ───────────────────────────────────────────────

/// A matched substring and the absolute offset it starts at.
///
/// Scoped to one request; never stored in the shared [`LineTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMark {
    pub text: String,
    pub offset: usize,
}

impl QueryMark {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// A 1-indexed window of corpus lines around one match.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub lines_text: Vec<String>,
    pub from_line: usize,
    pub to_line: usize,
}

/// One page of search results.
///
/// `Response::default()` is the zero-value response returned for "no match"
/// and for pages past the end; it is a successful result, not an error.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Matches across all pages
    pub total_quantity: usize,
    /// Results in this page
    pub page_quantity: usize,
    pub search_results: Vec<SearchResult>,
}


#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
