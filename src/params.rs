//! Path parameters bound by a lookup.
//!
//! A successful [`RouteTrie::lookup`](crate::RouteTrie::lookup) returns a
//! [`RouteParams`] holding one entry per parameter name the walk passed
//! through. Values are the raw request path segments; no percent-decoding is
//! applied.
//!
//! # Example
//!
//! ```
//! use route_trie::RouteTrie;
//!
//! let mut trie = RouteTrie::new();
//! trie.add("GET", "/users/:id/posts/:post", "post");
//!
//! let m = trie.lookup("GET", "/users/42/posts/7").unwrap();
//! assert_eq!(m.params.get("id"), Some(&"42".to_string()));
//! assert_eq!(m.params.get_as::<u32>("post"), Some(7));
//! ```

use std::collections::HashMap;

/// Parameter name to path segment mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Get a parameter value by name.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type
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

    /// Return `true` if the given name is bound.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all `(name, value)` pairs in unspecified order.
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

    /// Consume the parameters and return the underlying map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.params
    }

    /// Merge two parameter sets, `child` winning on collision.
    ///
    /// Handy when a router mounts one trie under a path parameter of another
    /// and needs a single mapping for the handler.
    ///
    /// ```
    /// use route_trie::RouteParams;
    ///
    /// let mut outer = RouteParams::new();
    /// outer.insert("tenant".to_string(), "acme".to_string());
    /// outer.insert("view".to_string(), "list".to_string());
    ///
    /// let mut inner = RouteParams::new();
    /// inner.insert("view".to_string(), "grid".to_string());
    ///
    /// let merged = RouteParams::merge(&outer, &inner);
    /// assert_eq!(merged.get("tenant"), Some(&"acme".to_string()));
    /// assert_eq!(merged.get("view"), Some(&"grid".to_string()));
    /// ```
    pub fn merge(parent: &RouteParams, child: &RouteParams) -> RouteParams {
        let mut merged = parent.clone();
        for (key, value) in child {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl From<RouteParams> for HashMap<String, String> {
    fn from(params: RouteParams) -> Self {
        params.params
    }
}

impl IntoIterator for RouteParams {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a RouteParams {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
