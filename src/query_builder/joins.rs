//! JOIN clause management.
//!
//! Joins are keyed by alias; the builder registers each alias at most once
//! so that filters requiring the same relation can be chained freely.

/// Represents the JOIN flavors the content queries use
#[derive(Debug, Clone, PartialEq)]
pub enum JoinType {
    Inner,
    Left,
}

impl JoinType {
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// Represents a SQL JOIN clause
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join_type: JoinType,
    pub table: String,
    pub alias: String,
    pub on_condition: String,
}

impl Join {
    /// Create an INNER JOIN
    pub fn inner(table: &str, alias: &str, on_condition: &str) -> Self {
        Self {
            join_type: JoinType::Inner,
            table: table.to_string(),
            alias: alias.to_string(),
            on_condition: on_condition.to_string(),
        }
    }

    /// Create a LEFT JOIN
    pub fn left(table: &str, alias: &str, on_condition: &str) -> Self {
        Self {
            join_type: JoinType::Left,
            table: table.to_string(),
            alias: alias.to_string(),
            on_condition: on_condition.to_string(),
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(
            "{} {} {} ON {}",
            self.join_type.to_sql(),
            self.table,
            self.alias,
            self.on_condition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_join() {
        let join = Join::inner("idx_content", "idx", "idx.content_uid = cc.uid");
        assert_eq!(
            join.to_sql(),
            "INNER JOIN idx_content idx ON idx.content_uid = cc.uid"
        );
    }

    #[test]
    fn test_left_join() {
        let join = Join::left("page", "mp", "mp.uid = cc.node_uid");
        assert_eq!(join.to_sql(), "LEFT JOIN page mp ON mp.uid = cc.node_uid");
    }
}
