//! Query options.
//!
//! OpenCGA web services accept an open-ended set of optional query
//! parameters. In place of dynamic keyword binding, callers build a
//! [`QueryOptions`] value: an insertion-ordered mapping from parameter name
//! to [`QueryValue`], passed as a single structured argument and forwarded
//! verbatim to the transport.

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Plain string value
    Str(String),
    /// List of strings, rendered comma-separated (OpenCGA convention)
    StringList(Vec<String>),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
}

impl QueryValue {
    /// Render the value as it appears in the query string (before encoding).
    fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::StringList(items) => items.join(","),
            Self::Int(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(items: Vec<String>) -> Self {
        Self::StringList(items)
    }
}

impl From<&[&str]> for QueryValue {
    fn from(items: &[&str]) -> Self {
        Self::StringList(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Ordered collection of optional query parameters.
///
/// Constructed fresh per call and never persisted by the client. Setting a
/// key twice overwrites the value in place, keeping the position of the
/// first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    params: Vec<(String, QueryValue)>,
}

impl QueryOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Set a parameter, overwriting any existing value for the same key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.params.push((key, value));
        }
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Fields to include in the response body.
    pub fn include(self, fields: &[&str]) -> Self {
        self.set("include", fields)
    }

    /// Fields to exclude from the response body.
    pub fn exclude(self, fields: &[&str]) -> Self {
        self.set("exclude", fields)
    }

    /// Maximum number of results to return.
    pub fn limit(self, limit: i64) -> Self {
        self.set("limit", limit)
    }

    /// Number of results to skip.
    pub fn skip(self, skip: i64) -> Self {
        self.set("skip", skip)
    }

    /// Whether to return the total result count.
    pub fn count(self, count: bool) -> Self {
        self.set("count", count)
    }

    /// Render as `(name, value)` pairs in insertion order, lists joined with
    /// commas. Percent-encoding happens at the transport boundary.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), v.render()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let options = QueryOptions::new()
            .set("b", "2")
            .set("a", "1")
            .set("c", "3");
        let pairs = options.to_query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let options = QueryOptions::new()
            .set("a", "1")
            .set("b", "2")
            .set("a", "changed");
        let pairs = options.to_query_pairs();
        assert_eq!(pairs[0], ("a".to_string(), "changed".to_string()));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn lists_join_with_commas() {
        let options = QueryOptions::new().set("category", ["samples", "files"].as_slice());
        assert_eq!(
            options.to_query_pairs(),
            vec![("category".to_string(), "samples,files".to_string())]
        );
    }

    #[test]
    fn common_conveniences() {
        let options = QueryOptions::new()
            .include(&["id", "name"])
            .limit(10)
            .skip(5)
            .count(true);
        let pairs = options.to_query_pairs();
        assert_eq!(pairs[0], ("include".to_string(), "id,name".to_string()));
        assert_eq!(pairs[1], ("limit".to_string(), "10".to_string()));
        assert_eq!(pairs[2], ("skip".to_string(), "5".to_string()));
        assert_eq!(pairs[3], ("count".to_string(), "true".to_string()));
    }

    #[test]
    fn empty_options_render_nothing() {
        let options = QueryOptions::new();
        assert!(options.is_empty());
        assert!(options.to_query_pairs().is_empty());
    }
}
