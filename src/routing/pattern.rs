//! Route pattern compilation.
//!
//! # Responsibilities
//! - Normalize paths (shared by patterns and incoming paths)
//! - Compile a pattern string into literal, parameter and wildcard segments once
//! - Flag malformed patterns (empty parameter name); only a trailing wildcard can still match them
//!
//! # Design Decisions
//! - Patterns are compiled at registration, never re-parsed per navigation
//! - A wildcard ends the pattern; anything registered after it is discarded
//! - Malformed patterns are kept rather than rejected; compiling is silent,
//!   the route table reports them once when it is built

use std::fmt;

/// Marker that introduces a named parameter segment (`:id`).
pub const PARAM_MARKER: char = ':';

/// Segment that matches the remainder of a path.
pub const WILDCARD: &str = "*";

/// Normalize a path for matching.
///
/// An empty path becomes `/`, trailing slashes are stripped unless the path is
/// the root. Nothing else is canonicalized: no case folding, no decoding.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// A single compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Binds the decoded path segment under this name.
    Param(String),
    /// Matches the rest of the path.
    Wildcard,
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    normalized: String,
    segments: Vec<Segment>,
    /// Raw prefix in front of a trailing wildcard, normalized.
    wildcard_prefix: Option<String>,
    malformed: bool,
    /// Segments dropped because they followed a wildcard.
    discarded: usize,
}

impl RoutePattern {
    /// Compile a pattern string.
    pub fn compile(source: impl Into<String>) -> Self {
        let source = source.into();
        let normalized = normalize_path(&source).to_string();

        let mut segments = Vec::new();
        let mut raw_prefix = Vec::new();
        let mut wildcard = false;
        let mut malformed = false;

        let mut parts = normalized.split('/').filter(|s| !s.is_empty());
        for part in parts.by_ref() {
            if part == WILDCARD {
                wildcard = true;
                segments.push(Segment::Wildcard);
                break;
            }
            raw_prefix.push(part);
            match part.strip_prefix(PARAM_MARKER) {
                Some(name) => {
                    if name.is_empty() {
                        malformed = true;
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        let discarded = parts.count();

        let wildcard_prefix = wildcard.then(|| {
            let joined = format!("/{}", raw_prefix.join("/"));
            normalize_path(&joined).to_string()
        });

        Self {
            source,
            normalized,
            segments,
            wildcard_prefix,
            malformed,
            discarded,
        }
    }

    /// The pattern exactly as registered.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The pattern after path normalization.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Prefix matched by a trailing wildcard, if the pattern has one.
    pub fn wildcard_prefix(&self) -> Option<&str> {
        self.wildcard_prefix.as_deref()
    }

    /// True when a parameter segment has no name.
    ///
    /// Such a pattern never matches segment by segment, but a trailing
    /// wildcard still matches its raw prefix (`/:/*` matches `/:/x`).
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Number of segments ignored after a wildcard.
    pub fn discarded_segments(&self) -> usize {
        self.discarded
    }

    /// True when the pattern is made of literal segments only.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Names of all parameter captures, in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

impl From<&str> for RoutePattern {
    fn from(source: &str) -> Self {
        Self::compile(source)
    }
}

impl From<String> for RoutePattern {
    fn from(source: String) -> Self {
        Self::compile(source)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
