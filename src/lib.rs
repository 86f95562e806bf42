//! Path-segment route trie.
//!
//! Registers URL-style templates (literal and `{name}` wildcard segments)
//! and resolves request paths to a handler plus the captured wildcard values.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{Bindings, Handler, RouteError, RouteMatch, RouteResult, RouteTable, RouteTrie};
