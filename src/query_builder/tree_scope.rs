//! Nested-set tree scope resolution.
//!
//! Given a page in the nested-set tree, resolves the content uids whose
//! parent content lies within that page's subtree. Resolution is two
//! sequential read phases against the engine; subtree matching happens on
//! the page relation while the final scoping happens on the content parent
//! relation, so the phases must not be fused into a single join.

use crate::database::engine::QueryEngine;
use crate::error::Result;
use crate::models::Page;
use crate::query_builder::{ParamStore, ParamValue, SqlQuery};

pub struct TreeScope;

impl TreeScope {
    /// Resolve the content uids scoped to `page`'s subtree.
    ///
    /// Returns `None` for the tree root (root scope is unrestricted). A
    /// `Some` with an empty vector means the subtree exists but contains no
    /// matching content; callers must filter everything out, not skip the
    /// filter.
    pub async fn resolve(
        engine: &dyn QueryEngine,
        page: &Page,
    ) -> Result<Option<Vec<String>>> {
        if page.is_root() {
            tracing::debug!(page_uid = %page.uid, "page is tree root, no scope restriction");
            return Ok(None);
        }

        // Phase 1: parent uids of every content whose page membership lies
        // within the subtree interval.
        let mut params = ParamStore::new();
        let root = params.bind("page_root", ParamValue::Text(page.root_uid.clone()));
        let left = params.bind("page_left_node", ParamValue::Int(i64::from(page.leftnode)));
        let right = params.bind(
            "page_right_node",
            ParamValue::Int(i64::from(page.rightnode)),
        );
        let phase_one = SqlQuery::new(
            format!(
                "SELECT DISTINCT ct.parent_uid FROM content ct \
                 INNER JOIN content_page cp ON cp.content_uid = ct.uid \
                 INNER JOIN page p ON p.uid = cp.page_uid \
                 WHERE p.root_uid = {root} \
                 AND p.leftnode >= {left} \
                 AND p.rightnode <= {right} \
                 AND ct.parent_uid IS NOT NULL"
            ),
            params,
        );

        let parent_uids = engine.fetch_uids(&phase_one).await?;
        tracing::debug!(
            page_uid = %page.uid,
            parents = parent_uids.len(),
            "tree scope phase 1 resolved"
        );

        if parent_uids.is_empty() {
            return Ok(Some(Vec::new()));
        }

        // Phase 2: content parented under any phase-1 container.
        let mut params = ParamStore::new();
        let parents = params.bind("scope_parents", ParamValue::TextArray(parent_uids));
        let phase_two = SqlQuery::new(
            format!("SELECT c.uid FROM content c WHERE c.parent_uid = ANY({parents})"),
            params,
        );

        let uids = engine.fetch_uids(&phase_two).await?;
        tracing::debug!(
            page_uid = %page.uid,
            contents = uids.len(),
            "tree scope phase 2 resolved"
        );

        Ok(Some(uids))
    }
}
