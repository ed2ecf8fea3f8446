//! Shared page/limit handling for list endpoints.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Raw `?page=&limit=` query, both optional
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Normalized pagination: `page >= 1`, `1 <= limit <= 100`,
/// `skip = (page - 1) * limit`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub skip: u32,
}

impl Pagination {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.unwrap_or(consts::DEFAULT_PAGE).max(1);
        let limit = match limit {
            Some(0) | None => consts::DEFAULT_PAGE_LIMIT,
            Some(limit) => limit.min(consts::MAX_PAGE_LIMIT),
        };

        Self {
            page,
            limit,
            skip: (page - 1).saturating_mul(limit),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl From<PageQuery> for Pagination {
    fn from(query: PageQuery) -> Self {
        Self::new(query.page, query.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::new(None, None);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.skip, 0);
    }

    #[test]
    fn test_pagination_computes_skip() {
        for (page, limit) in [(1, 10), (2, 10), (3, 25), (7, 100)] {
            let pagination = Pagination::new(Some(page), Some(limit));
            assert_eq!(pagination.skip, (page - 1) * limit);
        }
    }

    #[test]
    fn test_pagination_clamps_limit() {
        let pagination = Pagination::new(Some(2), Some(500));
        assert_eq!(pagination.limit, 100);
        assert_eq!(pagination.skip, 100);
    }

    #[test]
    fn test_pagination_page_zero_becomes_first_page() {
        let pagination = Pagination::new(Some(0), Some(20));
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.skip, 0);
    }

    #[test]
    fn test_pagination_from_query() {
        let pagination: Pagination = PageQuery {
            page: Some(3),
            limit: None,
        }
        .into();
        assert_eq!(pagination.skip, 20);
    }
}
