//! Shared helpers for integration tests.

use std::path::PathBuf;

use segment_router::RouteTrie;

/// Build a trie from `(template, handler)` pairs, panicking on any rejection.
#[allow(dead_code)]
pub fn build(routes: &[(&str, &'static str)]) -> RouteTrie<&'static str> {
    let mut trie = RouteTrie::new();
    for (template, handler) in routes {
        trie.append_route(template, *handler)
            .unwrap_or_else(|e| panic!("failed to register {}: {}", template, e));
    }
    trie
}

/// Write `content` to a per-process file in the temp dir.
#[allow(dead_code)]
pub fn write_route_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "segment_router_{}_{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}
