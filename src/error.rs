//! Unified error type for the search engine.

use thiserror::Error;

/// All errors that can occur while loading the corpus or answering a request.
///
/// An empty result set is never an error: it is a zero-count [`crate::Response`].
#[derive(Error, Debug)]
pub enum SearchError {
    /// Corpus file missing or unreadable. Fatal at startup.
    #[error("Failed to load corpus from {path}: {source}")]
    CorpusLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Request had no query, or an empty one
    #[error("missing search query")]
    MissingQuery,

    /// `page` was not a positive integer
    #[error("invalid page '{0}': must be an integer >= 1")]
    InvalidPage(String),

    /// `limit` was not a positive integer
    #[error("invalid limit '{0}': must be an integer >= 1")]
    InvalidLimit(String),

    /// Response encoding failed (server-side, not a client input error)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SearchError {
    /// True for errors caused by malformed client input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SearchError::MissingQuery | SearchError::InvalidPage(_) | SearchError::InvalidLimit(_)
        )
    }
}
