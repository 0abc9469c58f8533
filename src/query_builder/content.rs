//! The content query surface.
//!
//! [`ContentQuery`] accumulates filters against the polymorphic content
//! base set and finalizes into a paginated, ordered, deduplicated result
//! cursor. One instance serves one logical query: filter calls mutate the
//! shared predicate set and parameter store, no filter call executes the
//! outer query, and [`ContentQuery::paginate`] consumes the builder so it
//! cannot be reused after finalization.
//!
//! Filters commute: any order of calls produces the same result set, since
//! every filter conjoins into a single AND-joined predicate set.

use std::sync::Arc;

use super::builder::{QueryBuilder, SortDirection};
use super::classmap::ClassMap;
use super::conditions::{Condition, WhereClause};
use super::joins::Join;
use super::pagination::{Pagination, Paginator};
use super::tree_scope::TreeScope;
use super::ParamValue;
use crate::database::engine::{KeywordIndex, QueryEngine};
use crate::error::{ContentStoreError, Result};
use crate::models::{Page, Site};

/// A site given either by uid or by reference.
#[derive(Debug, Clone)]
pub enum SiteRef {
    Uid(String),
}

impl From<&Site> for SiteRef {
    fn from(site: &Site) -> Self {
        SiteRef::Uid(site.uid.clone())
    }
}

impl From<&str> for SiteRef {
    fn from(uid: &str) -> Self {
        SiteRef::Uid(uid.to_string())
    }
}

impl From<String> for SiteRef {
    fn from(uid: String) -> Self {
        SiteRef::Uid(uid)
    }
}

/// Fluent query builder over the polymorphic content store.
pub struct ContentQuery {
    engine: Arc<dyn QueryEngine>,
    builder: QueryBuilder,
    classmap: ClassMap,
}

impl std::fmt::Debug for ContentQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentQuery")
            .field("builder", &self.builder)
            .field("classmap", &self.classmap)
            .finish_non_exhaustive()
    }
}

impl ContentQuery {
    /// Select distinct content rows from the base collection, aliased `cc`
    /// for use in predicate composition.
    pub fn new(engine: Arc<dyn QueryEngine>) -> Self {
        Self::with_selection(engine, "cc.*")
    }

    /// Like [`ContentQuery::new`] with a custom selection expression.
    pub fn with_selection(engine: Arc<dyn QueryEngine>, selection: &str) -> Self {
        let builder = QueryBuilder::new("content cc")
            .select(&[selection])
            .distinct();
        Self {
            engine,
            builder,
            classmap: ClassMap::default(),
        }
    }

    /// Replace the class resolution table.
    pub fn with_classmap(mut self, classmap: ClassMap) -> Self {
        self.classmap = classmap;
        self
    }

    /// Restrict to content belonging to the given site.
    ///
    /// Implemented as a subquery over the site index relation rather than a
    /// join, to avoid row duplication. A blank uid is an `InvalidArgument`
    /// error.
    pub fn add_site_filter(mut self, site: impl Into<SiteRef>) -> Result<Self> {
        let SiteRef::Uid(uid) = site.into();
        if uid.trim().is_empty() {
            return Err(ContentStoreError::invalid_argument(
                "site filter requires a non-empty site uid",
            ));
        }

        let placeholder = self.builder.bind("site", ParamValue::Text(uid));
        self.builder = self.builder.where_in_subquery(
            "cc.uid",
            &format!(
                "SELECT i.content_uid FROM idx_site_content i WHERE i.site_uid = {placeholder}"
            ),
        );
        Ok(self)
    }

    /// Restrict to content with one of the given uids.
    ///
    /// An empty set is a no-op: no filter is applied and the current result
    /// set is unchanged. Note the asymmetry with
    /// [`ContentQuery::add_keywords_filter`], whose no-op is triggered by an
    /// empty *resolution*, not empty input; both policies are preserved
    /// deliberately.
    pub fn add_uids_filter(mut self, uids: &[String]) -> Self {
        if uids.is_empty() {
            tracing::warn!("empty uid set passed to uids filter, skipping");
            return self;
        }
        self.builder = self
            .builder
            .where_any("cc.uid", ParamValue::TextArray(uids.to_vec()));
        self
    }

    /// Restrict to content whose main tree node is online (or online and
    /// hidden). Content without a main node is excluded by the state
    /// predicate.
    pub fn limit_to_online(mut self) -> Self {
        self.builder = self
            .builder
            .register_join(Join::left("page", "mp", "mp.uid = cc.node_uid"))
            .where_any(
                "mp.state",
                ParamValue::IntArray(vec![
                    i64::from(Page::STATE_ONLINE),
                    i64::from(Page::STATE_ONLINE | Page::STATE_HIDDEN),
                ]),
            );
        self
    }

    /// Restrict to content whose parent lies within `page`'s nested-set
    /// subtree. No-op when the page is the tree root. Issues the tree scope
    /// resolver's two read phases before the outer query is finalized.
    pub async fn add_page_filter(mut self, page: &Page) -> Result<Self> {
        match TreeScope::resolve(self.engine.as_ref(), page).await? {
            None => Ok(self),
            Some(uids) if uids.is_empty() => {
                // An existing subtree with no matching content yields an
                // empty result set, not an unfiltered one.
                self.builder = self.builder.where_clause(WhereClause::raw("1 = 0"));
                Ok(self)
            }
            Some(uids) => {
                self.builder = self
                    .builder
                    .where_any("cc.uid", ParamValue::TextArray(uids));
                Ok(self)
            }
        }
    }

    /// Restrict to content matching the given keywords.
    ///
    /// Resolution is delegated to the keyword index collaborator. When the
    /// resolution yields nothing the filter is skipped entirely: no match
    /// means unfiltered, not empty. See [`ContentQuery::add_uids_filter`]
    /// for the inconsistency note.
    pub async fn add_keywords_filter(
        mut self,
        index: &dyn KeywordIndex,
        keywords: &[String],
    ) -> Result<Self> {
        let uids = index.resolve(keywords).await?;
        if uids.is_empty() {
            tracing::warn!(
                keywords = keywords.len(),
                "keyword resolution yielded no content, skipping filter"
            );
            return Ok(self);
        }
        self.builder = self
            .builder
            .where_any("cc.uid", ParamValue::TextArray(uids));
        Ok(self)
    }

    /// Restrict to content whose subtype is one of the given class aliases,
    /// OR-combined. No-op on an empty list; an unknown alias is a
    /// `ClassResolution` error.
    ///
    /// Discriminators come from the class resolution table, a closed
    /// vocabulary, so they are compared as literals rather than bound.
    pub fn add_class_filter(mut self, classes: &[&str]) -> Result<Self> {
        if classes.is_empty() {
            return Ok(self);
        }

        let mut conditions = Vec::with_capacity(classes.len());
        for alias in classes {
            let discriminator = self.classmap.resolve(alias)?;
            conditions.push(Condition::EqLiteral {
                field: "cc.classname".to_string(),
                value: discriminator.to_string(),
            });
        }
        self.builder = self.builder.where_clause(WhereClause::or(conditions));
        Ok(self)
    }

    /// Order by the indexation entry whose field equals `label`.
    ///
    /// Joins the indexation relation (inner semantics: content lacking the
    /// entry is excluded) and sorts by the entry value.
    pub fn order_by_index(mut self, label: &str, sort: SortDirection) -> Self {
        self.builder = self
            .builder
            .register_join(Join::inner(
                "idx_content",
                "idx",
                "idx.content_uid = cc.uid",
            ))
            .where_eq("idx.field", ParamValue::Text(label.to_string()))
            .order_by("idx.value", sort);
        self
    }

    /// Finalize with a zero-based row offset and max row count, returning a
    /// lazy result cursor. Consumes the builder; a query is finalized
    /// exactly once.
    pub fn paginate(self, start: u32, limit: u32) -> Paginator {
        let builder = self.builder.paginate(start, limit);
        let count_query = builder.count_query("COUNT(DISTINCT cc.uid)");
        let query = builder.into_query();
        Paginator::new(self.engine, query, count_query, Pagination::new(start, limit))
    }

    /// The SQL composed so far, for diagnostics and tests.
    pub fn build_sql(&self) -> String {
        self.builder.build_sql()
    }
}
