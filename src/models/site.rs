use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// A site owning content through the `idx_site_content` relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Site {
    pub uid: String,
    pub label: String,
    pub created_at: NaiveDateTime,
}

impl Site {
    /// Find a site by uid
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> Result<Option<Site>, sqlx::Error> {
        sqlx::query_as::<_, Site>("SELECT uid, label, created_at FROM site WHERE uid = $1")
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// List all sites
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Site>, sqlx::Error> {
        sqlx::query_as::<_, Site>("SELECT uid, label, created_at FROM site ORDER BY label")
            .fetch_all(pool)
            .await
    }
}
