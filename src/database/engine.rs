//! Execution engine contract and its PostgreSQL implementation.
//!
//! The query core owns an engine client by composition: the builder and the
//! tree scope resolver compose [`SqlQuery`] values and hand them to a
//! [`QueryEngine`], which binds every parameter through sqlx. Keyword
//! resolution is a separate collaborator contract ([`KeywordIndex`]); the
//! PostgreSQL engine implements both.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::error::Result;
use crate::models::Content;
use crate::query_builder::{ParamValue, SqlQuery};

/// Read contract the query core consumes.
///
/// One call is one round trip. Errors propagate synchronously; the core
/// performs no retries.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Execute a single-column uid query.
    async fn fetch_uids(&self, query: &SqlQuery) -> Result<Vec<String>>;

    /// Execute a content row query.
    async fn fetch_contents(&self, query: &SqlQuery) -> Result<Vec<Content>>;

    /// Execute a single-value count query.
    async fn fetch_count(&self, query: &SqlQuery) -> Result<i64>;
}

/// Keyword index collaborator: resolves keywords to content uids.
#[async_trait]
pub trait KeywordIndex: Send + Sync {
    async fn resolve(&self, keywords: &[String]) -> Result<Vec<String>>;
}

/// Binds a [`SqlQuery`]'s parameters onto an sqlx query in placeholder order.
macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut q = $query;
        for value in $params.values() {
            q = match value {
                ParamValue::Text(v) => q.bind(v.clone()),
                ParamValue::Int(v) => q.bind(*v),
                ParamValue::TextArray(v) => q.bind(v.clone()),
                ParamValue::IntArray(v) => q.bind(v.clone()),
            };
        }
        q
    }};
}

/// PostgreSQL execution engine over an sqlx connection pool.
pub struct PgQueryEngine {
    pool: PgPool,
}

impl PgQueryEngine {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QueryEngine for PgQueryEngine {
    async fn fetch_uids(&self, query: &SqlQuery) -> Result<Vec<String>> {
        tracing::debug!(sql = %query.sql, params = query.params.len(), "fetch_uids");
        let rows = bind_params!(sqlx::query(&query.sql), query.params)
            .fetch_all(&self.pool)
            .await?;
        let uids = rows
            .iter()
            .map(|row| row.try_get::<String, _>(0))
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;
        Ok(uids)
    }

    async fn fetch_contents(&self, query: &SqlQuery) -> Result<Vec<Content>> {
        tracing::debug!(sql = %query.sql, params = query.params.len(), "fetch_contents");
        let contents = bind_params!(sqlx::query_as::<_, Content>(&query.sql), query.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(contents)
    }

    async fn fetch_count(&self, query: &SqlQuery) -> Result<i64> {
        tracing::debug!(sql = %query.sql, params = query.params.len(), "fetch_count");
        let count = bind_params!(sqlx::query_scalar::<_, i64>(&query.sql), query.params)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl KeywordIndex for PgQueryEngine {
    async fn resolve(&self, keywords: &[String]) -> Result<Vec<String>> {
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let uids = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT ic.content_uid FROM idx_keyword_content ic \
             INNER JOIN keyword k ON k.uid = ic.keyword_uid \
             WHERE lower(k.keyword) = ANY($1)",
        )
        .bind(lowered)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            keywords = keywords.len(),
            contents = uids.len(),
            "keyword resolution"
        );
        Ok(uids)
    }
}
