//! Published route table for the serve phase.
//!
//! # Responsibilities
//! - Hold the current, fully built trie behind an atomic pointer
//! - Give readers lock-free snapshots
//! - Swap in a rebuilt trie without disturbing in-flight matches
//!
//! # Design Decisions
//! - A trie is only mutated through `&mut` before it is published, so the build phase
//!   stays single-writer by construction
//! - Readers hold an `Arc` snapshot; a swap never changes a snapshot already taken

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::observability::metrics;
use crate::routing::error::RouteResult;
use crate::routing::trie::{Bindings, RouteTrie};

/// Shared, atomically replaceable route trie.
#[derive(Debug)]
pub struct RouteTable<H> {
    current: ArcSwap<RouteTrie<H>>,
}

impl<H> RouteTable<H> {
    /// Publish `trie` as the initial table.
    pub fn new(trie: RouteTrie<H>) -> Self {
        metrics::record_route_count(trie.len());
        Self {
            current: ArcSwap::from_pointee(trie),
        }
    }

    /// Snapshot of the current trie.
    pub fn load(&self) -> Arc<RouteTrie<H>> {
        self.current.load_full()
    }

    /// Replace the published trie.
    pub fn replace(&self, trie: RouteTrie<H>) {
        let routes = trie.len();
        self.current.store(Arc::new(trie));
        metrics::record_route_count(routes);
        tracing::info!(routes, "Route table replaced");
    }
}

impl<H: Clone> RouteTable<H> {
    /// Match against the current snapshot and return owned results.
    pub fn match_owned(&self, path: &str) -> RouteResult<(H, Bindings)> {
        let trie = self.current.load();
        let found = trie.match_path(path)?;
        Ok((found.handler.clone(), found.bindings))
    }
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new(RouteTrie::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_keeps_old_snapshot() {
        let mut first = RouteTrie::new();
        first.append_route("/v1", "one").unwrap();
        let table = RouteTable::new(first);

        let snapshot = table.load();

        let mut second = RouteTrie::new();
        second.append_route("/v2", "two").unwrap();
        table.replace(second);

        // Old snapshot still answers with the old routes
        assert_eq!(snapshot.match_path("/v1").unwrap().handler, &"one");
        assert!(snapshot.match_path("/v2").is_err());

        // New readers see the new table
        assert!(table.match_owned("/v1").is_err());
        let (handler, bindings) = table.match_owned("/v2").unwrap();
        assert_eq!(handler, "two");
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_default_table_is_empty() {
        let table: RouteTable<String> = RouteTable::default();
        assert!(table.load().is_empty());
        assert!(table.match_owned("/anything").unwrap_err().is_not_found());
    }
}
