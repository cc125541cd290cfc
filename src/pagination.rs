//! Pagination helper for list endpoints.
//!
//! Derives `offset`/`limit` from `page`/`per_page` query parameters and
//! wraps list results with paging metadata.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default number of items per page when the client does not specify one.
pub const DEFAULT_PER_PAGE: u64 = 100;
/// Upper bound for the client-supplied page size.
pub const MAX_PER_PAGE: u64 = 1_000;

/// Query parameters accepted by the list endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// 1-based page number (default 1)
    pub page: Option<u64>,
    /// Page size (default 100, capped at 1000)
    pub per_page: Option<u64>,
}

/// One page of results together with paging metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pages<T> {
    pub page: u64,
    pub per_page: u64,
    pub page_count: u64,
    pub total_count: i64,
    pub items: Vec<T>,
}

impl<T> Pages<T> {
    /// Builds empty paging metadata from the query parameters and the total
    /// row count; the caller fills `items` with the fetched page.
    pub fn new(query: &PaginationQuery, total_count: i64) -> Self {
        let mut per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 {
            per_page = DEFAULT_PER_PAGE;
        }
        if per_page > MAX_PER_PAGE {
            per_page = MAX_PER_PAGE;
        }

        let total = total_count.max(0) as u64;
        let page_count = total.div_ceil(per_page);

        let mut page = query.page.unwrap_or(1);
        if page_count > 0 && page > page_count {
            page = page_count;
        }
        if page == 0 {
            page = 1;
        }

        Self {
            page,
            per_page,
            page_count,
            total_count,
            items: Vec::new(),
        }
    }

    /// Number of rows to skip for the current page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.per_page
    }

    /// Maximum number of rows on the current page.
    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Attach the fetched items to the page envelope.
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<u64>, per_page: Option<u64>) -> PaginationQuery {
        PaginationQuery { page, per_page }
    }

    #[test]
    fn test_defaults() {
        let pages: Pages<()> = Pages::new(&query(None, None), 250);

        assert_eq!(pages.page, 1);
        assert_eq!(pages.per_page, DEFAULT_PER_PAGE);
        assert_eq!(pages.page_count, 3);
        assert_eq!(pages.total_count, 250);
        assert_eq!(pages.offset(), 0);
        assert_eq!(pages.limit(), 100);
    }

    #[test]
    fn test_offset_advances_with_page() {
        let pages: Pages<()> = Pages::new(&query(Some(3), Some(20)), 250);

        assert_eq!(pages.page, 3);
        assert_eq!(pages.offset(), 40);
        assert_eq!(pages.limit(), 20);
    }

    #[test]
    fn test_per_page_is_capped() {
        let pages: Pages<()> = Pages::new(&query(None, Some(10_000)), 50);
        assert_eq!(pages.per_page, MAX_PER_PAGE);

        let pages: Pages<()> = Pages::new(&query(None, Some(0)), 50);
        assert_eq!(pages.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_page_clamped_to_page_count() {
        let pages: Pages<()> = Pages::new(&query(Some(99), Some(10)), 25);

        assert_eq!(pages.page_count, 3);
        assert_eq!(pages.page, 3);
        assert_eq!(pages.offset(), 20);
    }

    #[test]
    fn test_zero_total() {
        let pages: Pages<()> = Pages::new(&query(Some(5), Some(10)), 0);

        assert_eq!(pages.page_count, 0);
        assert_eq!(pages.page, 1);
        assert_eq!(pages.offset(), 0);
    }
}
