//! Path matching logic.
//!
//! # Responsibilities
//! - Match a normalized path against one compiled pattern
//! - Extract and decode named parameters
//! - Treat trailing wildcards as subtree matches
//!
//! # Design Decisions
//! - Literal segments are case-sensitive and compared without decoding
//! - Segment counts must be equal unless the pattern ends in a wildcard
//! - Wildcard prefixes only match at a `/` boundary (`/blog/*` does not match `/blogger`)
//! - No regex, no scoring: a pattern either matches or it does not

use std::collections::BTreeMap;

use serde::Serialize;

use crate::routing::decode::decode_component;
use crate::routing::pattern::{normalize_path, RoutePattern, Segment};

/// Decoded route parameters keyed by capture name.
pub type RouteParams = BTreeMap<String, String>;

/// Outcome of matching one pattern against one path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub params: RouteParams,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn with_params(params: RouteParams) -> Self {
        Self {
            matched: true,
            params,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }
}

/// Trait for matching paths against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Match the given (not yet normalized) path.
    fn match_path(&self, path: &str) -> MatchResult;
}

impl Matcher for RoutePattern {
    fn match_path(&self, path: &str) -> MatchResult {
        let path = normalize_path(path);

        if self.is_static() && self.normalized() == path {
            return MatchResult::with_params(RouteParams::new());
        }

        if let Some(prefix) = self.wildcard_prefix() {
            return if within_prefix(path, prefix) {
                MatchResult::with_params(RouteParams::new())
            } else {
                MatchResult::no_match()
            };
        }

        if self.is_malformed() {
            return MatchResult::no_match();
        }

        let pattern_segments = self.segments();
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if pattern_segments.len() != path_segments.len() {
            return MatchResult::no_match();
        }

        let mut params = RouteParams::new();
        for (segment, value) in pattern_segments.iter().zip(path_segments) {
            match segment {
                Segment::Param(name) => {
                    params.insert(name.clone(), decode_component(value));
                }
                Segment::Literal(literal) => {
                    if literal != value {
                        return MatchResult::no_match();
                    }
                }
                // Only reachable as the last segment, handled above
                Segment::Wildcard => return MatchResult::no_match(),
            }
        }

        MatchResult::with_params(params)
    }
}

/// Returns true if `path` is `prefix` or lies beneath it.
fn within_prefix(path: &str, prefix: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Compile `pattern` and match it against `path` in one step.
///
/// Convenient for one-off checks; route tables compile their patterns once.
pub fn match_route(pattern: &str, path: &str) -> MatchResult {
    RoutePattern::compile(pattern).match_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let result = match_route("/about", "/about");
        assert!(result.is_match());
        assert!(result.params.is_empty());

        assert!(match_route("/about", "/about/").is_match());
        assert!(match_route("/about/", "/about").is_match());
        assert!(!match_route("/about", "/About").is_match());
    }

    #[test]
    fn test_root_and_empty() {
        assert!(match_route("/", "/").is_match());
        assert!(match_route("", "/").is_match());
        assert!(match_route("/", "").is_match());
        assert!(!match_route("/", "/home").is_match());
    }

    #[test]
    fn test_param_extraction() {
        let result = match_route("/users/:id", "/users/42");
        assert_eq!(result, MatchResult::with_params(params(&[("id", "42")])));

        let result = match_route("/users/:user/posts/:post", "/users/ann/posts/7/");
        assert_eq!(result.params, params(&[("user", "ann"), ("post", "7")]));
    }

    #[test]
    fn test_param_values_are_decoded() {
        let result = match_route("/search/:term", "/search/hello%20world");
        assert_eq!(result.params.get("term").map(String::as_str), Some("hello world"));
    }

    #[test]
    fn test_param_with_bad_escape_stays_raw() {
        let result = match_route("/s/:t", "/s/a%20%zz");
        assert_eq!(result.params.get("t").map(String::as_str), Some("a%20%zz"));
    }

    #[test]
    fn test_literals_are_not_decoded() {
        assert!(!match_route("/a b", "/a%20b").is_match());
        assert!(match_route("/a%20b", "/a%20b").is_match());
        assert!(!match_route("/files/a b/:name", "/files/a%20b/x").is_match());
    }

    #[test]
    fn test_segment_count_must_match() {
        assert!(!match_route("/users/:id", "/users").is_match());
        assert!(!match_route("/users/:id", "/users/1/edit").is_match());
    }

    #[test]
    fn test_wildcard_containment() {
        assert!(match_route("/blog/*", "/blog").is_match());
        assert!(match_route("/blog/*", "/blog/").is_match());
        assert!(match_route("/blog/*", "/blog/2024/post-1").is_match());
        assert!(!match_route("/blog/*", "/blogger").is_match());
        assert!(!match_route("/blog/*", "/").is_match());

        let result = match_route("/blog/*", "/blog/2024");
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_root_wildcard_matches_everything() {
        assert!(match_route("/*", "/").is_match());
        assert!(match_route("*", "/anything/at/all").is_match());
    }

    #[test]
    fn test_malformed_param_never_matches() {
        assert!(!match_route("/users/:", "/users/1").is_match());
        assert!(!match_route("/users/:", "/users/:").is_match());
    }

    #[test]
    fn test_malformed_prefix_with_wildcard_still_matches() {
        // The wildcard compares raw prefixes, so the empty name never gets bound
        let result = match_route("/:/*", "/:/x");
        assert!(result.is_match());
        assert!(result.params.is_empty());
        assert!(!match_route("/:/*", "/a/x").is_match());
    }

    #[test]
    fn test_param_pattern_binds_literal_marker_text() {
        // A param pattern never takes the static fast path, so capture stays total
        let result = match_route("/users/:id", "/users/:id");
        assert_eq!(result.params, params(&[("id", ":id")]));
    }
}
