//! Query string decoding.
//!
//! `?a=1&b=2&a=3` decodes to `{a: ["1", "3"], b: "2"}`: the first occurrence
//! of a key is a scalar, a repeat promotes it to a list in arrival order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::routing::decode::decode_component;

/// Decoded query parameters.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// A query value: single occurrence or repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// First value for the key.
    pub fn first(&self) -> &str {
        match self {
            QueryValue::Single(v) => v,
            QueryValue::Multiple(values) => values.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// All values for the key, in order.
    pub fn all(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(v) => vec![v.as_str()],
            QueryValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(current) => {
                let first = std::mem::take(current);
                *self = QueryValue::Multiple(vec![first, value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

/// Parse a search string, with or without its leading `?`.
pub fn parse_query(search: &str) -> QueryParams {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut params = QueryParams::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(raw_key);
        if key.is_empty() {
            continue;
        }
        let value = decode_component(raw_value);

        match params.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                params.insert(key, QueryValue::Single(value));
            }
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_values() {
        let params = parse_query("a=1&b=2");
        assert_eq!(params.len(), 2);
        assert_eq!(params["a"], QueryValue::from("1"));
        assert_eq!(params["b"], QueryValue::from("2"));
    }

    #[test]
    fn test_leading_question_mark() {
        assert_eq!(parse_query("?a=1"), parse_query("a=1"));
        assert!(parse_query("?").is_empty());
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_repeated_keys_promote_to_list() {
        let params = parse_query("a=1&a=2");
        assert_eq!(params["a"], QueryValue::Multiple(vec!["1".into(), "2".into()]));

        let params = parse_query("a=1&b=x&a=2&a=3");
        assert_eq!(params["a"].all(), vec!["1", "2", "3"]);
        assert_eq!(params["a"].first(), "1");
    }

    #[test]
    fn test_missing_value_defaults_to_empty() {
        let params = parse_query("flag&x=");
        assert_eq!(params["flag"], QueryValue::from(""));
        assert_eq!(params["x"], QueryValue::from(""));
    }

    #[test]
    fn test_empty_keys_are_dropped() {
        let params = parse_query("=orphan&&a=1&%20=space");
        assert_eq!(params.len(), 2);
        assert!(params.contains_key("a"));
        assert!(params.contains_key(" "));
    }

    #[test]
    fn test_keys_and_values_are_decoded() {
        let params = parse_query("q=hello%20world&caf%C3%A9=1&bad=%E0%A4");
        assert_eq!(params["q"].first(), "hello world");
        assert_eq!(params["café"].first(), "1");
        assert_eq!(params["bad"].first(), "%E0%A4");
    }

    #[test]
    fn test_partly_malformed_value_stays_raw() {
        let params = parse_query("x=a%20%zz&y=a%20b");
        assert_eq!(params["x"].first(), "a%20%zz");
        assert_eq!(params["y"].first(), "a b");
    }

    #[test]
    fn test_value_keeps_extra_equals() {
        let params = parse_query("expr=a=b");
        assert_eq!(params["expr"].first(), "a=b");
    }

    #[test]
    fn test_serializes_scalars_and_lists() {
        let params = parse_query("a=1&a=2&b=3");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"a": ["1", "2"], "b": "3"}));
    }
}
