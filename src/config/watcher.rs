//! Route file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::{load_trie, ConfigError};
use crate::routing::RouteTrie;

/// Monitors a route file and sends a freshly built trie on every change.
pub struct RouteWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RouteTrie<String>>,
}

impl RouteWatcher {
    /// Create a new RouteWatcher.
    ///
    /// Returns the watcher and a receiver for rebuilt tries.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouteTrie<String>>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Reload the file once and forward the result.
    ///
    /// On error nothing is sent, so consumers keep their current table.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let (_, trie) = load_trie(&self.path)?;
        tracing::info!(path = ?self.path, routes = trie.len(), "Route file reloaded");
        // A closed channel means nobody is listening any more.
        let _ = self.update_tx.send(trie);
        Ok(())
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Route file change detected, reloading...");
                        if let Err(e) = self.reload() {
                            tracing::error!(
                                "Failed to reload routes: {}. Keeping current table.",
                                e
                            );
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Route watcher started");
        Ok(watcher)
    }
}
