//! WHERE clause composition.
//!
//! Conditions carry already-rendered placeholders from the builder's
//! [`ParamStore`](super::ParamStore); converting a clause to SQL is pure
//! string assembly. The only literal interpolation allowed is
//! [`Condition::EqLiteral`], reserved for trusted, internally-enumerated
//! vocabularies such as class discriminators.

/// A single boolean condition within a WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `field = $n`
    Eq { field: String, placeholder: String },
    /// `field = ANY($n)` over an array parameter
    Any { field: String, placeholder: String },
    /// `field IN (subquery)`
    InSubquery { field: String, subquery: String },
    /// `field = 'value'` — trusted, closed vocabulary only (never user input)
    EqLiteral { field: String, value: String },
    /// Raw SQL fragment
    Raw { sql: String },
}

impl Condition {
    /// Convert condition to SQL string
    pub fn to_sql(&self) -> String {
        match self {
            Condition::Eq { field, placeholder } => format!("{field} = {placeholder}"),
            Condition::Any { field, placeholder } => format!("{field} = ANY({placeholder})"),
            Condition::InSubquery { field, subquery } => format!("{field} IN ({subquery})"),
            Condition::EqLiteral { field, value } => {
                format!("{} = '{}'", field, value.replace('\'', "''"))
            }
            Condition::Raw { sql } => sql.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// A WHERE clause grouping one or more conditions.
///
/// Clauses accumulate in the builder's predicate set and are joined with
/// AND; a clause's inner conditions may be OR-grouped (class filtering).
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
    pub operator: LogicalOperator,
}

impl WhereClause {
    /// Single `field = $n` condition.
    pub fn eq(field: &str, placeholder: &str) -> Self {
        Self {
            conditions: vec![Condition::Eq {
                field: field.to_string(),
                placeholder: placeholder.to_string(),
            }],
            operator: LogicalOperator::And,
        }
    }

    /// Single `field = ANY($n)` condition.
    pub fn any(field: &str, placeholder: &str) -> Self {
        Self {
            conditions: vec![Condition::Any {
                field: field.to_string(),
                placeholder: placeholder.to_string(),
            }],
            operator: LogicalOperator::And,
        }
    }

    /// Single `field IN (subquery)` condition.
    pub fn in_subquery(field: &str, subquery: &str) -> Self {
        Self {
            conditions: vec![Condition::InSubquery {
                field: field.to_string(),
                subquery: subquery.to_string(),
            }],
            operator: LogicalOperator::And,
        }
    }

    /// Single raw SQL condition.
    pub fn raw(sql: &str) -> Self {
        Self {
            conditions: vec![Condition::Raw {
                sql: sql.to_string(),
            }],
            operator: LogicalOperator::And,
        }
    }

    /// Combine multiple conditions with OR.
    pub fn or(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::Or,
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        if self.conditions.is_empty() {
            return "1=1".to_string();
        }

        if self.conditions.len() == 1 {
            return self.conditions[0].to_sql();
        }

        let operator_str = match self.operator {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
        };

        let condition_sqls: Vec<String> = self.conditions.iter().map(|c| c.to_sql()).collect();

        format!("({})", condition_sqls.join(operator_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_condition() {
        let condition = Condition::Eq {
            field: "idx.field".to_string(),
            placeholder: "$1".to_string(),
        };
        assert_eq!(condition.to_sql(), "idx.field = $1");
    }

    #[test]
    fn test_any_condition() {
        let condition = Condition::Any {
            field: "cc.uid".to_string(),
            placeholder: "$2".to_string(),
        };
        assert_eq!(condition.to_sql(), "cc.uid = ANY($2)");
    }

    #[test]
    fn test_in_subquery_condition() {
        let condition = Condition::InSubquery {
            field: "cc.uid".to_string(),
            subquery: "SELECT i.content_uid FROM idx_site_content i WHERE i.site_uid = $1"
                .to_string(),
        };
        assert_eq!(
            condition.to_sql(),
            "cc.uid IN (SELECT i.content_uid FROM idx_site_content i WHERE i.site_uid = $1)"
        );
    }

    #[test]
    fn test_eq_literal_escapes_quotes() {
        let condition = Condition::EqLiteral {
            field: "cc.classname".to_string(),
            value: "content/it's".to_string(),
        };
        assert_eq!(condition.to_sql(), "cc.classname = 'content/it''s'");
    }

    #[test]
    fn test_or_grouping() {
        let clause = WhereClause::or(vec![
            Condition::EqLiteral {
                field: "cc.classname".to_string(),
                value: "content/article".to_string(),
            },
            Condition::EqLiteral {
                field: "cc.classname".to_string(),
                value: "content/media".to_string(),
            },
        ]);
        assert_eq!(
            clause.to_sql(),
            "(cc.classname = 'content/article' OR cc.classname = 'content/media')"
        );
    }

    #[test]
    fn test_empty_clause_is_vacuously_true() {
        let clause = WhereClause {
            conditions: Vec::new(),
            operator: LogicalOperator::And,
        };
        assert_eq!(clause.to_sql(), "1=1");
    }
}
