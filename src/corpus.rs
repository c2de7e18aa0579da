//! Corpus loading and the shared, read-only search engine handle.

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::error::SearchError;
use crate::lines::LineTable;
use crate::matcher;
use crate::page::PageRequest;
use crate::suffix::SuffixIndex;
use crate::Response;

/// The searchable corpus: raw text, its line table and a case-insensitive offset index.
///
/// Built once, never mutated. Share it across threads with `Arc<Corpus>`;
/// every search borrows it immutably and keeps its own per-request state.
#[derive(Debug)]
pub struct Corpus {
    text: String,
    lines: LineTable,
    index: SuffixIndex,
}

impl Corpus {
    /// Read and index the corpus file. Any I/O failure is fatal to the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let (text, was_lossy) = read_corpus_lossy(path).map_err(|source| SearchError::CorpusLoad {
            path: path.display().to_string(),
            source,
        })?;
        if was_lossy {
            warn!(path = %path.display(), "Corpus is not valid UTF-8, invalid bytes replaced");
        }
        Ok(Self::from_text(text))
    }

    /// Index an in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let start = Instant::now();
        let text = text.into();
        let lines = LineTable::build(&text);
        let index = SuffixIndex::new(fold_case(&text).into_bytes());
        info!(
            bytes = text.len(),
            lines = lines.len(),
            elapsed_ms = format_args!("{:.1}", start.elapsed().as_secs_f64() * 1000.0),
            "Corpus indexed"
        );
        Self { text, lines, index }
    }

    /// Every byte offset where `query` occurs, ignoring case. Unordered.
    pub fn lookup(&self, query: &str) -> Vec<usize> {
        self.index.lookup(fold_case(query).as_bytes())
    }

    /// Full match first, multi-word intersection when the query occurs nowhere.
    pub fn search(&self, query: &str, limit: usize, page: usize) -> Response {
        matcher::search(self, query, PageRequest::new(page, limit))
    }

    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lowercase `text` without moving any byte offset.
///
/// A char is folded only when its lowercase form is a single char of the same
/// UTF-8 length (É→é, Æ→æ, Σ→σ, Д→д); anything else is kept as-is.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
                _ => c,
            }
        })
        .collect()
}

/// Read a file as a String, using lossy UTF-8 conversion for non-UTF-8 input.
/// Returns `(content, was_lossy)`.
pub fn read_corpus_lossy(path: &Path) -> std::io::Result<(String, bool)> {
    let raw = std::fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}
