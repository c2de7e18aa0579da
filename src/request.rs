//! Request boundary: raw `q` / `page` / `limit` parameters → validated search request.

use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::page::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::Response;

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: PageRequest,
}

impl SearchRequest {
    /// Validate raw parameters as they arrive from a client.
    ///
    /// `q` must be present and non-empty. `page` and `limit` fall back to
    /// their defaults when absent or empty, otherwise must be integers >= 1
    /// written without padding.
    pub fn from_params(q: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Result<Self, SearchError> {
        let query = match q {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => return Err(SearchError::MissingQuery),
        };
        let page_num = parse_positive(page, DEFAULT_PAGE).map_err(SearchError::InvalidPage)?;
        let limit = parse_positive(limit, DEFAULT_LIMIT).map_err(SearchError::InvalidLimit)?;
        Ok(Self {
            query,
            page: PageRequest::new(page_num, limit),
        })
    }

    pub fn execute(&self, corpus: &Corpus) -> Response {
        corpus.search(&self.query, self.page.limit, self.page.page)
    }
}

/// Parse an optional positive integer. The raw text is returned as the error.
fn parse_positive(raw: Option<&str>, default: usize) -> Result<usize, String> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(default);
    };
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(raw.to_string()),
    }
}
