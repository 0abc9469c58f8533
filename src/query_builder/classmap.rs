//! Class-name resolution table.
//!
//! Polymorphic subtype filtering compares the stored `classname`
//! discriminator against an enumerated set of type tags. Aliases are
//! resolved to stable discriminator values at configuration time, so the
//! class filter never inspects runtime types and never interpolates user
//! input.

use std::collections::HashMap;

use crate::error::{ContentStoreError, Result};

/// Maps class aliases to stored discriminator values.
#[derive(Debug, Clone)]
pub struct ClassMap {
    map: HashMap<String, String>,
}

impl ClassMap {
    /// An empty map; useful when the embedding application registers its
    /// own content classes.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register an alias. Re-registering an alias overwrites it.
    pub fn insert(&mut self, alias: impl Into<String>, discriminator: impl Into<String>) {
        self.map.insert(alias.into(), discriminator.into());
    }

    /// Resolve an alias to its discriminator.
    pub fn resolve(&self, alias: &str) -> Result<&str> {
        self.map
            .get(alias)
            .map(String::as_str)
            .ok_or_else(|| ContentStoreError::ClassResolution {
                alias: alias.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for ClassMap {
    /// The platform's built-in content classes.
    fn default() -> Self {
        let mut map = Self::new();
        map.insert("article", "content/article");
        map.insert("media", "content/media");
        map.insert("container", "content/container");
        map.insert("image", "element/image");
        map.insert("text", "element/text");
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_resolves_builtin_aliases() {
        let map = ClassMap::default();
        assert_eq!(map.resolve("article").unwrap(), "content/article");
        assert_eq!(map.resolve("text").unwrap(), "element/text");
    }

    #[test]
    fn test_unknown_alias_is_a_resolution_error() {
        let map = ClassMap::default();
        let err = map.resolve("widget").unwrap_err();
        assert!(matches!(
            err,
            ContentStoreError::ClassResolution { alias } if alias == "widget"
        ));
    }

    #[test]
    fn test_insert_overrides_builtin() {
        let mut map = ClassMap::default();
        map.insert("article", "custom/article");
        assert_eq!(map.resolve("article").unwrap(), "custom/article");
    }
}
