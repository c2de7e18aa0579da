//! Pagination window shared by both search paths.

use std::ops::Range;

/// Page used when the request does not name one.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the request does not name one.
pub const DEFAULT_LIMIT: usize = 20;

/// A 1-indexed page of `limit` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Slice of a `total`-long, document-ordered match list covered by this page.
    ///
    /// Returns `None` when the page starts at or beyond `total` (or when
    /// page/limit is zero); callers answer that with the zero-value response.
    pub fn window(&self, total: usize) -> Option<Range<usize>> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        let initial = (self.page - 1).checked_mul(self.limit)?;
        if initial >= total {
            return None;
        }
        let end = self
            .page
            .checked_mul(self.limit)
            .map_or(total, |end| end.min(total));
        Some(initial..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_page() {
        let page = PageRequest::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 20);
    }

    #[test]
    fn test_first_page_shorter_than_limit() {
        assert_eq!(PageRequest::new(1, 20).window(2), Some(0..2));
    }

    #[test]
    fn test_middle_and_last_page() {
        assert_eq!(PageRequest::new(2, 10).window(25), Some(10..20));
        assert_eq!(PageRequest::new(3, 10).window(25), Some(20..25));
    }

    #[test]
    fn test_page_starting_at_total_is_empty() {
        assert_eq!(PageRequest::new(2, 1).window(1), None);
        assert_eq!(PageRequest::new(4, 10).window(25), None);
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(PageRequest::new(1, 20).window(0), None);
    }

    #[test]
    fn test_zero_page_or_limit() {
        assert_eq!(PageRequest::new(0, 20).window(100), None);
        assert_eq!(PageRequest::new(1, 0).window(100), None);
    }

    #[test]
    fn test_overflowing_page_is_empty() {
        assert_eq!(PageRequest::new(usize::MAX, 2).window(100), None);
        assert_eq!(PageRequest::new(1, usize::MAX).window(7), Some(0..7));
    }

    proptest! {
        /// Never more than `limit` entries, never out of bounds.
        #[test]
        fn window_within_bounds(page in 1usize..50, limit in 1usize..50, total in 0usize..2000) {
            if let Some(range) = PageRequest::new(page, limit).window(total) {
                prop_assert!(range.len() <= limit);
                prop_assert!(range.end <= total);
                prop_assert!(!range.is_empty());
            } else {
                prop_assert!((page - 1) * limit >= total);
            }
        }

        /// Consecutive pages tile the match list without gaps or overlap.
        #[test]
        fn pages_cover_total(limit in 1usize..30, total in 0usize..500) {
            let mut covered = 0;
            let mut page = 1;
            while let Some(range) = PageRequest::new(page, limit).window(total) {
                prop_assert_eq!(range.start, covered);
                covered = range.end;
                page += 1;
            }
            prop_assert_eq!(covered, total);
        }
    }
}
