use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// A nested-set tree node.
///
/// Subtree membership reduces to interval containment over
/// `leftnode`/`rightnode` within a tree identified by `root_uid`. `state`
/// is a bitmask combinable via OR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Page {
    pub uid: String,
    /// Uid of the tree root; equals `uid` for root pages
    pub root_uid: String,
    pub parent_uid: Option<String>,
    pub leftnode: i32,
    pub rightnode: i32,
    pub state: i32,
}

impl Page {
    pub const STATE_OFFLINE: i32 = 0;
    pub const STATE_ONLINE: i32 = 1;
    pub const STATE_HIDDEN: i32 = 2;
    pub const STATE_DELETED: i32 = 4;

    /// Whether this page is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.parent_uid.is_none()
    }

    /// Whether the page is online, ignoring other state bits.
    pub fn is_online(&self) -> bool {
        self.state & Self::STATE_ONLINE != 0
    }

    /// Find a page by uid
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> Result<Option<Page>, sqlx::Error> {
        sqlx::query_as::<_, Page>(
            "SELECT uid, root_uid, parent_uid, leftnode, rightnode, state \
             FROM page WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(pool)
        .await
    }
}
