//! Bind parameter management for composed queries.
//!
//! Every user-supplied value entering a predicate goes through a
//! [`ParamStore`], which assigns it a name unique within the builder and a
//! PostgreSQL positional placeholder. Values are bound at execution, never
//! interpolated into SQL text.

/// A value bound to a composed query.
///
/// The closed set of types keeps the engine's bind loop exhaustive; array
/// variants back `= ANY($n)` predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    TextArray(Vec<String>),
    IntArray(Vec<i64>),
}

/// Ordered store of named bind parameters.
///
/// Names are generated as `{prefix}_{ordinal}`, so two filters binding the
/// same prefix never collide within one builder. The placeholder returned by
/// [`ParamStore::bind`] is positional (`$1`, `$2`, ...) and matches the
/// order values are handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct ParamStore {
    params: Vec<(String, ParamValue)>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value, returning the positional placeholder to splice into SQL.
    pub fn bind(&mut self, prefix: &str, value: ParamValue) -> String {
        let ordinal = self.params.len() + 1;
        let name = format!("{prefix}_{ordinal}");
        self.params.push((name, value));
        format!("${ordinal}")
    }

    /// Bound values, in placeholder order.
    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.params.iter().map(|(_, value)| value)
    }

    /// Generated parameter names, in placeholder order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A finalized query: SQL text plus the parameters it binds.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    pub sql: String,
    pub params: ParamStore,
}

impl SqlQuery {
    pub fn new(sql: impl Into<String>, params: ParamStore) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_returns_positional_placeholders() {
        let mut store = ParamStore::new();
        assert_eq!(store.bind("site", ParamValue::Text("s1".to_string())), "$1");
        assert_eq!(store.bind("state", ParamValue::Int(1)), "$2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_generated_names_are_unique() {
        let mut store = ParamStore::new();
        store.bind("uids", ParamValue::TextArray(vec!["a".to_string()]));
        store.bind("uids", ParamValue::TextArray(vec!["b".to_string()]));

        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["uids_1", "uids_2"]);
    }

    #[test]
    fn test_values_preserve_bind_order() {
        let mut store = ParamStore::new();
        store.bind("a", ParamValue::Int(1));
        store.bind("b", ParamValue::Int(2));

        let values: Vec<&ParamValue> = store.values().collect();
        assert_eq!(values, vec![&ParamValue::Int(1), &ParamValue::Int(2)]);
    }
}
