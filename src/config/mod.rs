//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → loader.rs (build_trie: register routes in file order)
//!     → RouteTrie<String>, published through a RouteTable
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads and rebuilds
//!     → new trie sent over a channel
//!     → consumer swaps it into the RouteTable
//! ```
//!
//! # Design Decisions
//! - Handlers in a route file are names; the router treats them as opaque
//! - All fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks
//! - A rejected reload keeps the current table

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{build_trie, load_config, load_trie, parse_config, ConfigError};
pub use schema::{LogFormat, ObservabilityConfig, RouteConfig, RouterConfig};
pub use watcher::RouteWatcher;
