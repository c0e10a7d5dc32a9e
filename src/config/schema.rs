//! Configuration schema definitions.
//!
//! Route declarations, the origin used to resolve navigation targets, and
//! logging settings. All types derive Serde traits for deserialization from
//! TOML files.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::routing::RouteTable;

/// Root configuration for a router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Origin that navigation targets resolve against (e.g., "https://example.com").
    pub origin: String,

    /// Route declarations, evaluated in this order.
    pub routes: Vec<RouteConfig>,

    /// Content id shown when no route matches.
    pub fallback: Option<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost/".to_string(),
            routes: Vec::new(),
            fallback: None,
            observability: ObservabilityConfig::default(),
        }
    }
}

impl RouterConfig {
    /// Compile the declared routes into a table keyed by content id.
    pub fn build_table(&self) -> RouteTable<String> {
        let builder = self
            .routes
            .iter()
            .fold(RouteTable::builder(), |builder, route| {
                builder.route(route.pattern.as_str(), route.content.clone())
            });

        let builder = match &self.fallback {
            Some(fallback) => builder.fallback(fallback.clone()),
            None => builder,
        };
        builder.build()
    }

    /// Parsed origin.
    pub fn origin_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.origin)
    }
}

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Pattern such as "/users/:id" or "/blog/*".
    pub pattern: String,

    /// Opaque id of the content shown for this route.
    pub content: String,
}

impl RouteConfig {
    pub fn new(pattern: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            content: content.into(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the pretty format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
