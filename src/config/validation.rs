//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks that serde cannot express
//! - Reject templates with no usable segments
//! - Reject unnamed wildcards (`{}`) and empty handler names
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Structural conflicts (duplicates, two wildcards per level) are left to the trie,
//!   which reports them while building

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::segment::{segments, Segment};

/// A single semantic problem in a route file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: template {template:?} has no segments")]
    EmptyTemplate { index: usize, template: String },

    #[error("route #{index}: wildcard in {template:?} has no name")]
    UnnamedWildcard { index: usize, template: String },

    #[error("route #{index}: template {template:?} has no handler")]
    MissingHandler { index: usize, template: String },

    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        let template = &route.template;

        if segments(template).next().is_none() {
            errors.push(ValidationError::EmptyTemplate {
                index,
                template: template.clone(),
            });
        }

        let unnamed = segments(template)
            .map(Segment::parse)
            .any(|s| matches!(s, Segment::Wildcard { name, .. } if name.trim().is_empty()));
        if unnamed {
            errors.push(ValidationError::UnnamedWildcard {
                index,
                template: template.clone(),
            });
        }

        if route.handler.trim().is_empty() {
            errors.push(ValidationError::MissingHandler {
                index,
                template: template.clone(),
            });
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
