//! Navigation targets and their resolution.

use std::fmt;

use serde::Serialize;
use url::Url;

/// A path plus its search string (`?` included when non-empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub search: String,
}

impl Location {
    pub fn new(path: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            search: search.into(),
        }
    }

    /// Location of the site root.
    pub fn root() -> Self {
        Self::new("/", "")
    }

    /// Split a raw `path?search` string at the first `?`.
    ///
    /// An empty path becomes `/`.
    pub fn from_raw(raw: &str) -> Self {
        let (path, search) = match raw.find('?') {
            Some(index) => raw.split_at(index),
            None => (raw, ""),
        };
        let path = if path.is_empty() { "/" } else { path };
        Self::new(path, search)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.search)
    }
}

/// Resolve a navigation target against an origin.
///
/// Relative and absolute targets go through URL resolution, which yields an
/// absolute path. If resolution fails the raw string is used as the path.
/// Fragments are dropped.
pub fn resolve_target(origin: &Url, target: &str) -> Location {
    match origin.join(target) {
        Ok(url) => Location::new(
            url.path(),
            url.query().map(|q| format!("?{}", q)).unwrap_or_default(),
        ),
        Err(e) => {
            tracing::debug!(nav_target = target, error = %e, "Unresolvable navigation target, using raw path");
            let raw = target.split('#').next().unwrap_or_default();
            Location::from_raw(raw)
        }
    }
}

/// Base URL for resolution: the origin's root, whatever path it was given with.
pub fn origin_root(origin: &Url) -> Url {
    let mut root = origin.clone();
    root.set_path("/");
    root.set_query(None);
    root.set_fragment(None);
    root
}
