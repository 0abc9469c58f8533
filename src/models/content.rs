use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Content is the polymorphic base entity of the platform.
/// Maps to the `content` table; `classname` is the subtype discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub uid: String,
    pub classname: String,
    pub label: Option<String>,
    /// Owning parent content, if any
    pub parent_uid: Option<String>,
    /// Main tree node, if any
    pub node_uid: Option<String>,
    /// Serialized content payload
    pub data: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// New content for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContent {
    pub classname: String,
    pub label: Option<String>,
    pub parent_uid: Option<String>,
    pub node_uid: Option<String>,
    pub data: Option<serde_json::Value>,
}

const CONTENT_COLUMNS: &str =
    "uid, classname, label, parent_uid, node_uid, data, created_at, modified_at";

impl Content {
    /// Create a new content item with a generated uid
    pub async fn create(pool: &PgPool, new_content: NewContent) -> Result<Content, sqlx::Error> {
        let uid = Uuid::new_v4().simple().to_string();
        sqlx::query_as::<_, Content>(&format!(
            "INSERT INTO content (uid, classname, label, parent_uid, node_uid, data, created_at, modified_at) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW()) \
             RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(uid)
        .bind(new_content.classname)
        .bind(new_content.label)
        .bind(new_content.parent_uid)
        .bind(new_content.node_uid)
        .bind(new_content.data)
        .fetch_one(pool)
        .await
    }

    /// Find a content item by uid
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> Result<Option<Content>, sqlx::Error> {
        sqlx::query_as::<_, Content>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content WHERE uid = $1"
        ))
        .bind(uid)
        .fetch_optional(pool)
        .await
    }

    /// Find all content items of a given discriminator
    pub async fn find_by_classname(
        pool: &PgPool,
        classname: &str,
    ) -> Result<Vec<Content>, sqlx::Error> {
        sqlx::query_as::<_, Content>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content WHERE classname = $1 ORDER BY uid"
        ))
        .bind(classname)
        .fetch_all(pool)
        .await
    }

    /// Find the direct children of a content item
    pub async fn find_children(pool: &PgPool, uid: &str) -> Result<Vec<Content>, sqlx::Error> {
        sqlx::query_as::<_, Content>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content WHERE parent_uid = $1 ORDER BY uid"
        ))
        .bind(uid)
        .fetch_all(pool)
        .await
    }
}
