//! Core SQL assembly.
//!
//! [`QueryBuilder`] accumulates the predicate set, joins, ordering and
//! pagination for one query and renders the final SQL. Values never appear
//! in the rendered text; they are bound through the builder's
//! [`ParamStore`] and travel with the [`SqlQuery`] to the engine.

use std::str::FromStr;

use super::{Join, ParamStore, ParamValue, Pagination, SqlQuery, WhereClause};
use crate::error::ContentStoreError;

/// Sort direction for ORDER BY clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ContentStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            other => Err(ContentStoreError::invalid_argument(format!(
                "unknown sort direction: {other}"
            ))),
        }
    }
}

/// Accumulates one query's clauses and renders the final SQL.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_table: String,
    select_fields: Vec<String>,
    distinct: bool,
    joins: Vec<Join>,
    where_clauses: Vec<WhereClause>,
    order_by: Vec<String>,
    pagination: Option<Pagination>,
    params: ParamStore,
}

impl QueryBuilder {
    /// Create a new query builder for the given table (with alias).
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            select_fields: vec!["*".to_string()],
            distinct: false,
            joins: Vec::new(),
            where_clauses: Vec::new(),
            order_by: Vec::new(),
            pagination: None,
            params: ParamStore::new(),
        }
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Request DISTINCT rows
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Bind a value, returning the placeholder to splice into a clause.
    pub fn bind(&mut self, prefix: &str, value: ParamValue) -> String {
        self.params.bind(prefix, value)
    }

    /// Register a JOIN; a second registration of the same alias is a no-op.
    pub fn register_join(mut self, join: Join) -> Self {
        if !self.joins.iter().any(|j| j.alias == join.alias) {
            self.joins.push(join);
        }
        self
    }

    /// Add a WHERE clause to the AND-joined predicate set.
    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clauses.push(clause);
        self
    }

    /// Add a bound `field = value` condition.
    pub fn where_eq(mut self, field: &str, value: ParamValue) -> Self {
        let placeholder = self.params.bind(&prefix_for(field), value);
        self.where_clause(WhereClause::eq(field, &placeholder))
    }

    /// Add a bound `field = ANY(values)` condition.
    pub fn where_any(mut self, field: &str, value: ParamValue) -> Self {
        let placeholder = self.params.bind(&prefix_for(field), value);
        self.where_clause(WhereClause::any(field, &placeholder))
    }

    /// Add a `field IN (subquery)` condition; the subquery's placeholders
    /// must already be bound through [`QueryBuilder::bind`].
    pub fn where_in_subquery(self, field: &str, subquery: &str) -> Self {
        self.where_clause(WhereClause::in_subquery(field, subquery))
    }

    /// Add an ORDER BY clause
    pub fn order_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.order_by.push(format!("{} {}", field, direction.to_sql()));
        self
    }

    /// Set OFFSET/LIMIT from a zero-based row offset and max row count.
    pub fn paginate(mut self, start: u32, limit: u32) -> Self {
        self.pagination = Some(Pagination::new(start, limit));
        self
    }

    /// Build the complete SQL query string
    pub fn build_sql(&self) -> String {
        let mut sql = String::from("SELECT ");

        if self.distinct {
            sql.push_str("DISTINCT ");
        }

        sql.push_str(&self.select_fields.join(", "));
        sql.push_str(&format!(" FROM {}", self.base_table));

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
        }

        if !self.where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            let where_parts: Vec<String> = self
                .where_clauses
                .iter()
                .map(|clause| clause.to_sql())
                .collect();
            sql.push_str(&where_parts.join(" AND "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(ref pagination) = self.pagination {
            sql.push_str(&pagination.to_sql());
        }

        sql
    }

    /// Finalize into an executable query.
    pub fn into_query(self) -> SqlQuery {
        let sql = self.build_sql();
        SqlQuery::new(sql, self.params)
    }

    /// Derive the count query: selection replaced by `count_expr`, ordering
    /// and pagination stripped. Parameter positions are unaffected because
    /// only non-binding clauses are removed.
    pub fn count_query(&self, count_expr: &str) -> SqlQuery {
        let mut count_builder = self.clone();
        count_builder.select_fields = vec![count_expr.to_string()];
        count_builder.distinct = false;
        count_builder.order_by.clear();
        count_builder.pagination = None;
        count_builder.into_query()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Parameter name prefix derived from a (possibly alias-qualified) field.
fn prefix_for(field: &str) -> String {
    field.replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_query_building() {
        let query = QueryBuilder::new("content cc")
            .select(&["cc.uid", "cc.classname"])
            .distinct()
            .where_eq("cc.classname", ParamValue::Text("content/article".into()))
            .order_by("cc.uid", SortDirection::Desc)
            .paginate(0, 10);

        let sql = query.build_sql();
        assert!(sql.starts_with("SELECT DISTINCT cc.uid, cc.classname"));
        assert!(sql.contains("FROM content cc"));
        assert!(sql.contains("cc.classname = $1"));
        assert!(sql.contains("ORDER BY cc.uid DESC"));
        assert!(sql.contains("LIMIT 10 OFFSET 0"));
    }

    #[test]
    fn test_join_registration_is_idempotent() {
        let query = QueryBuilder::new("content cc")
            .register_join(Join::inner(
                "idx_content",
                "idx",
                "idx.content_uid = cc.uid",
            ))
            .register_join(Join::inner(
                "idx_content",
                "idx",
                "idx.content_uid = cc.uid",
            ));

        let sql = query.build_sql();
        assert_eq!(sql.matches("INNER JOIN idx_content idx").count(), 1);
    }

    #[test]
    fn test_where_clauses_are_and_joined_in_order() {
        let query = QueryBuilder::new("content cc")
            .where_eq("cc.uid", ParamValue::Text("u1".into()))
            .where_any("cc.uid", ParamValue::TextArray(vec!["u2".into()]));

        let sql = query.build_sql();
        assert!(sql.contains("WHERE cc.uid = $1 AND cc.uid = ANY($2)"));
    }

    #[test]
    fn test_count_query_strips_ordering_and_pagination() {
        let builder = QueryBuilder::new("content cc")
            .distinct()
            .where_eq("cc.classname", ParamValue::Text("content/media".into()))
            .order_by("cc.uid", SortDirection::Asc)
            .paginate(10, 5);

        let count = builder.count_query("COUNT(DISTINCT cc.uid)");
        assert!(count.sql.starts_with("SELECT COUNT(DISTINCT cc.uid)"));
        assert!(!count.sql.contains("ORDER BY"));
        assert!(!count.sql.contains("LIMIT"));
        assert_eq!(count.params.len(), 1);
    }

    #[test]
    fn test_sort_direction_parsing() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!(
            "DESC".parse::<SortDirection>().unwrap(),
            SortDirection::Desc
        );
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
