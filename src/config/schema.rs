//! Configuration schema definitions.
//!
//! A route file is TOML:
//!
//! ```toml
//! [observability]
//! log_level = "debug"
//! log_format = "json"
//!
//! [[routes]]
//! template = "/users/{id}/posts"
//! handler = "list_posts"
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration for a route table.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, registered in file order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single route definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route template, e.g. "/users/{id}".
    pub template: String,

    /// Handler name bound to the template. Opaque to the router.
    pub handler: String,
}

impl RouteConfig {
    pub fn new(template: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            handler: handler.into(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
