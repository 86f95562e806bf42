//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (build phase, single writer):
//!     template "/users/{id}/posts"
//!     → segment.rs (split, drop empty segments, classify wildcards)
//!     → trie.rs (append_route: extend nodes, bind handler)
//!     → table.rs (publish finished trie)
//!
//! Incoming path (serve phase, many readers):
//!     "/users/42/posts"
//!     → table.rs (snapshot)
//!     → trie.rs (match_path: literal child, else wildcard child)
//!     → Return: handler + bindings, or RouteNotFound
//! ```
//!
//! # Design Decisions
//! - Matching is a pure walk over `&RouteTrie`; no cursor is stored on the trie
//! - Deterministic: same trie and path always give the same result
//! - Explicit `RouteNotFound` rather than a best-effort partial match

pub mod error;
pub mod handler;
pub mod segment;
pub mod table;
pub mod trie;

pub use error::{RouteError, RouteResult};
pub use handler::Handler;
pub use table::RouteTable;
pub use trie::{Bindings, Node, NodeId, RouteMatch, RouteTrie};
