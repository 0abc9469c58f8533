use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// An indexation entry: a (content, field, value) triple used for keyword
/// search and index-driven ordering.
/// Maps to the `idx_content` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct IndexEntry {
    pub content_uid: String,
    pub field: String,
    pub value: String,
}

impl IndexEntry {
    /// All index entries for a content item
    pub async fn for_content(pool: &PgPool, uid: &str) -> Result<Vec<IndexEntry>, sqlx::Error> {
        sqlx::query_as::<_, IndexEntry>(
            "SELECT content_uid, field, value FROM idx_content WHERE content_uid = $1 \
             ORDER BY field",
        )
        .bind(uid)
        .fetch_all(pool)
        .await
    }
}
