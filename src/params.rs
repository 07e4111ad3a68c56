//! Route parameters captured from `:name` segments.
//!
//! ```
//! use teamflow_nav::RouteParams;
//!
//! // Pattern /transit/:id, matched path /transit/42
//! let mut params = RouteParams::new();
//! params.insert("id".to_string(), "42".to_string());
//!
//! assert_eq!(params.get("id"), Some(&"42".to_string()));
//! assert_eq!(params.get_as::<u32>("id"), Some(42));
//! ```

use std::collections::HashMap;

/// Parameters extracted while matching a path against a route pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type.
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_as_parses() {
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "17".to_string());
        params.insert("slug".to_string(), "cargo".to_string());

        assert_eq!(params.get_as::<i64>("id"), Some(17));
        assert_eq!(params.get_as::<i64>("slug"), None);
        assert_eq!(params.get_as::<i64>("missing"), None);
        assert!(params.contains("slug"));
        assert_eq!(params.len(), 2);
    }
}
