//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::{RouteError, RouteTrie};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Route table rejected: {0}")]
    Route(#[from] RouteError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Build a trie from the configured routes, in file order.
///
/// Stops at the first rejected route; a partially built trie is discarded.
pub fn build_trie(config: &RouterConfig) -> Result<RouteTrie<String>, ConfigError> {
    let mut trie = RouteTrie::new();
    for route in &config.routes {
        trie.append_route(&route.template, route.handler.clone())?;
    }
    tracing::debug!(routes = trie.len(), nodes = trie.node_count(), "Route trie built");
    Ok(trie)
}

/// Load a route file and build its trie.
pub fn load_trie(path: &Path) -> Result<(RouterConfig, RouteTrie<String>), ConfigError> {
    let config = load_config(path)?;
    let trie = build_trie(&config)?;
    Ok((config, trie))
}
