//! Pagination and the lazy result cursor.

use std::sync::Arc;

use super::SqlQuery;
use crate::database::engine::QueryEngine;
use crate::error::Result;
use crate::models::Content;

/// OFFSET/LIMIT parameters for a finalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based row offset
    pub offset: u32,
    /// Maximum row count
    pub limit: u32,
}

impl Pagination {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(" LIMIT {} OFFSET {}", self.limit, self.offset)
    }

    /// Total pages given a total row count.
    pub fn total_pages(&self, total_count: u32) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        total_count.div_ceil(self.limit)
    }

    /// Whether rows exist past this window.
    pub fn has_next_page(&self, total_count: u32) -> bool {
        self.offset.saturating_add(self.limit) < total_count
    }
}

/// Lazy, countable result cursor over a finalized content query.
///
/// Nothing is executed until [`Paginator::fetch`] or [`Paginator::count`]
/// is called; each access is one round trip to the engine (fetch and count
/// are two logically separate round trips).
pub struct Paginator {
    engine: Arc<dyn QueryEngine>,
    query: SqlQuery,
    count_query: SqlQuery,
    pagination: Pagination,
}

impl Paginator {
    pub(crate) fn new(
        engine: Arc<dyn QueryEngine>,
        query: SqlQuery,
        count_query: SqlQuery,
        pagination: Pagination,
    ) -> Self {
        Self {
            engine,
            query,
            count_query,
            pagination,
        }
    }

    /// Materialize the current page of rows.
    pub async fn fetch(&self) -> Result<Vec<Content>> {
        tracing::debug!(sql = %self.query.sql, "paginator fetch");
        self.engine.fetch_contents(&self.query).await
    }

    /// Count all matching rows, ignoring the pagination window.
    pub async fn count(&self) -> Result<i64> {
        tracing::debug!(sql = %self.count_query.sql, "paginator count");
        self.engine.fetch_count(&self.count_query).await
    }

    /// Total pages for the current window size; one count round trip.
    pub async fn total_pages(&self) -> Result<u32> {
        let total = self.count().await?;
        Ok(self.pagination.total_pages(total.max(0) as u32))
    }

    /// The finalized SQL, for diagnostics.
    pub fn sql(&self) -> &str {
        &self.query.sql
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_sql() {
        let pagination = Pagination::new(20, 10);
        assert_eq!(pagination.to_sql(), " LIMIT 10 OFFSET 20");
    }

    #[test]
    fn test_first_window() {
        let pagination = Pagination::new(0, 25);
        assert_eq!(pagination.to_sql(), " LIMIT 25 OFFSET 0");
    }

    #[test]
    fn test_total_pages_calculation() {
        let pagination = Pagination::new(0, 10);
        assert_eq!(pagination.total_pages(25), 3);
        assert_eq!(pagination.total_pages(30), 3);
        assert_eq!(pagination.total_pages(31), 4);
        assert_eq!(pagination.total_pages(0), 0);
    }

    #[test]
    fn test_has_next_page() {
        let pagination = Pagination::new(10, 10);
        assert!(pagination.has_next_page(25));
        assert!(!pagination.has_next_page(20));
    }

    #[test]
    fn test_has_next_page_at_extreme_offset() {
        let pagination = Pagination::new(u32::MAX, 10);
        assert!(!pagination.has_next_page(u32::MAX));
    }
}
