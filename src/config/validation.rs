//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Origin must be an absolute URL that can serve as a resolution base
//! - Content ids must be non-empty
//! - Warn about routes that can never be reached and malformed patterns
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Shadowing is reported as a warning only: registration order is the caller's contract
//! - Validation is pure apart from logging: RouterConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{Matcher, RoutePattern};

/// A semantic problem in a router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("origin '{origin}' is not a valid URL: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("origin '{0}' cannot be used as a base URL")]
    OriginNotBase(String),

    #[error("route #{index} ('{pattern}') has an empty content id")]
    EmptyContent { index: usize, pattern: String },

    #[error("fallback content id is empty")]
    EmptyFallback,
}

/// Validate a configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.origin_url() {
        Ok(url) if url.cannot_be_a_base() => {
            errors.push(ValidationError::OriginNotBase(config.origin.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidOrigin {
            origin: config.origin.clone(),
            reason: e.to_string(),
        }),
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.content.trim().is_empty() {
            errors.push(ValidationError::EmptyContent {
                index,
                pattern: route.pattern.clone(),
            });
        }
    }

    if matches!(&config.fallback, Some(f) if f.trim().is_empty()) {
        errors.push(ValidationError::EmptyFallback);
    }

    warn_on_shadowed_routes(config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Indexes of static routes that an earlier route always wins over.
///
/// Only literal-only routes are checked: their single path is run through
/// every earlier pattern.
pub fn shadowed_routes(config: &RouterConfig) -> Vec<(usize, usize)> {
    let patterns: Vec<RoutePattern> = config
        .routes
        .iter()
        .map(|r| RoutePattern::compile(r.pattern.as_str()))
        .collect();

    let mut shadowed = Vec::new();
    for (later, pattern) in patterns.iter().enumerate() {
        if !pattern.is_static() {
            continue;
        }
        if let Some(earlier) = patterns[..later]
            .iter()
            .position(|p| p.match_path(pattern.normalized()).is_match())
        {
            shadowed.push((later, earlier));
        }
    }
    shadowed
}

fn warn_on_shadowed_routes(config: &RouterConfig) {
    for (later, earlier) in shadowed_routes(config) {
        tracing::warn!(
            route = %config.routes[later].pattern,
            shadowed_by = %config.routes[earlier].pattern,
            "Route is unreachable: an earlier route always matches first"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use crate::observability::metrics::testing::CountingRecorder;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = RouterConfig {
            origin: "not a url".into(),
            routes: vec![
                RouteConfig::new("/", ""),
                RouteConfig::new("/about", "about"),
                RouteConfig::new("/x", "  "),
            ],
            fallback: Some(String::new()),
            ..RouterConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ValidationError::InvalidOrigin { .. }));
        assert_eq!(
            errors[1],
            ValidationError::EmptyContent {
                index: 0,
                pattern: "/".into()
            }
        );
        assert_eq!(errors[3], ValidationError::EmptyFallback);
    }

    #[test]
    fn test_origin_must_be_base() {
        let config = RouterConfig {
            origin: "mailto:someone@example.com".into(),
            ..RouterConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::OriginNotBase(
                "mailto:someone@example.com".into()
            )]
        );
    }

    #[test]
    fn test_shadowed_routes_are_reported_not_rejected() {
        let config = RouterConfig {
            routes: vec![
                RouteConfig::new("/users/:id", "profile"),
                RouteConfig::new("/users/me", "me"),
                RouteConfig::new("/blog/*", "blog"),
                RouteConfig::new("/blog/archive", "archive"),
                RouteConfig::new("/about", "about"),
            ],
            ..RouterConfig::default()
        };

        assert_eq!(shadowed_routes(&config), vec![(1, 0), (3, 2)]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_malformed_pattern_counted_once_per_load() {
        let config = RouterConfig {
            routes: vec![
                RouteConfig::new("/users/:", "broken"),
                RouteConfig::new("/users/:id", "profile"),
            ],
            ..RouterConfig::default()
        };

        let recorder = CountingRecorder::default();
        let table = metrics::with_local_recorder(&recorder, || {
            assert!(validate_config(&config).is_ok());
            config.build_table()
        });

        assert_eq!(table.len(), 2);
        assert_eq!(recorder.count("router_malformed_patterns_total"), 1);
    }
}
