//! Segment trie holding registered routes.
//!
//! # Responsibilities
//! - Store one node per distinct registered segment
//! - Register templates with duplicate and wildcard-conflict detection
//! - Walk request paths and collect wildcard bindings
//!
//! # Design Decisions
//! - Nodes live in an arena (`Vec<Node>`) addressed by `NodeId`; parent links are plain indices
//! - Matching takes `&self` and keeps its cursor on the stack, so a built trie can be
//!   shared across threads without locks
//! - At most one wildcard child per node; literal children are always tried first
//! - No backtracking: once a literal child is chosen the walk never revisits the wildcard sibling
//! - A failed registration is not rolled back; nodes created before the failure stay

use std::collections::HashMap;

use crate::observability::metrics;
use crate::routing::error::{RouteError, RouteResult};
use crate::routing::segment::{segments, wildcard_name, Segment, DELIMITER};

/// Wildcard captures produced by a match: capture name -> matched text.
pub type Bindings = HashMap<String, String>;

/// Index of a node inside a [`RouteTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node. Never carries a handler.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A single trie node.
#[derive(Debug, Clone)]
pub struct Node<H> {
    /// Segment text as registered (braces included for wildcards).
    segment: String,
    is_wildcard: bool,
    /// Set only on route terminals.
    handler: Option<H>,
    /// Literal segment text -> child.
    children: HashMap<String, NodeId>,
    /// The single wildcard child, if any. Its key is that child's `segment`.
    wildcard_child: Option<NodeId>,
    /// Back-reference for template reconstruction; not ownership.
    parent: Option<NodeId>,
}

impl<H> Node<H> {
    fn new(segment: &str, is_wildcard: bool, parent: Option<NodeId>) -> Self {
        Self {
            segment: segment.to_string(),
            is_wildcard,
            handler: None,
            children: HashMap::new(),
            wildcard_child: None,
            parent,
        }
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_wildcard_child(&self) -> bool {
        self.wildcard_child.is_some()
    }

    /// Number of direct children, wildcard included.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Capture name for wildcard nodes.
    pub fn capture_name(&self) -> Option<&str> {
        if self.is_wildcard {
            wildcard_name(&self.segment)
        } else {
            None
        }
    }
}

/// Result of a successful match.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, H> {
    /// Handler bound to the matched route.
    pub handler: &'a H,
    /// Captured wildcard values, keyed by capture name.
    pub bindings: Bindings,
}

impl<'a, H> RouteMatch<'a, H> {
    /// Value captured under `name`, if any.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }
}

/// Route trie keyed by path segments.
///
/// `H` is opaque: the trie stores it on registration and hands it back on
/// match without inspecting it.
///
/// ```
/// use segment_router::RouteTrie;
///
/// let mut trie = RouteTrie::new();
/// trie.append_route("/users/{id}/posts", "list_posts").unwrap();
///
/// let found = trie.match_path("/users/42/posts").unwrap();
/// assert_eq!(*found.handler, "list_posts");
/// assert_eq!(found.param("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct RouteTrie<H> {
    nodes: Vec<Node<H>>,
    routes: usize,
}

impl<H> Default for RouteTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTrie<H> {
    /// Create a trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("", false, None)],
            routes: 0,
        }
    }

    /// Register `handler` under `template`.
    ///
    /// Segments of the form `{name}` are wildcards. Empty segments are
    /// skipped. On error the trie may keep nodes created before the failing
    /// segment, so callers should stop registering rather than retry.
    pub fn append_route(&mut self, template: &str, handler: H) -> RouteResult<()> {
        let result = self.insert(template, handler);
        match &result {
            Ok(()) => {
                metrics::record_registration("ok");
                metrics::record_route_count(self.routes);
            }
            Err(e) => {
                metrics::record_registration(e.kind());
                tracing::warn!(template = %template, error = %e, "Route registration rejected");
            }
        }
        result
    }

    fn insert(&mut self, template: &str, handler: H) -> RouteResult<()> {
        let mut current = NodeId::ROOT;
        let mut appended = false;

        for raw in segments(template) {
            let segment = Segment::parse(raw);
            let existing = self.nodes[current.0].children.get(segment.key()).copied();
            current = match existing {
                Some(child) => child,
                None => self.create_child(current, segment, template)?,
            };
            appended = true;
        }

        if !appended {
            return Err(RouteError::CannotAppendRoute {
                template: template.to_string(),
            });
        }

        let terminal = &mut self.nodes[current.0];
        if terminal.handler.is_some() {
            return Err(RouteError::RouteAlreadyExists {
                template: template.to_string(),
            });
        }
        terminal.handler = Some(handler);
        self.routes += 1;

        tracing::debug!(template = %template, node = current.0, "Route registered");
        Ok(())
    }

    fn create_child(
        &mut self,
        parent: NodeId,
        segment: Segment<'_>,
        template: &str,
    ) -> RouteResult<NodeId> {
        if let Segment::Wildcard { raw, .. } = segment {
            if let Some(existing) = self.nodes[parent.0].wildcard_child {
                return Err(RouteError::OnlyOneWildcard {
                    template: template.to_string(),
                    existing: self.nodes[existing.0].segment.clone(),
                    rejected: raw.to_string(),
                });
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::new(segment.key(), segment.is_wildcard(), Some(parent)));

        let parent_node = &mut self.nodes[parent.0];
        parent_node.children.insert(segment.key().to_string(), id);
        if segment.is_wildcard() {
            parent_node.wildcard_child = Some(id);
        }
        Ok(id)
    }

    /// Resolve `path` to its handler and wildcard bindings.
    ///
    /// Never mutates the trie. When a capture name repeats along the path,
    /// the deeper capture wins.
    pub fn match_path(&self, path: &str) -> RouteResult<RouteMatch<'_, H>> {
        let result = self.walk(path);
        metrics::record_match(if result.is_ok() { "matched" } else { "not_found" });
        result
    }

    fn walk(&self, path: &str) -> RouteResult<RouteMatch<'_, H>> {
        let mut current = &self.nodes[NodeId::ROOT.0];
        let mut bindings = Bindings::new();

        for segment in segments(path) {
            let Some(next) = self.find_child(current, segment) else {
                return Err(RouteError::RouteNotFound {
                    path: path.to_string(),
                    bindings,
                });
            };
            if let Some(name) = next.capture_name() {
                bindings.insert(name.to_string(), segment.to_string());
            }
            current = next;
        }

        match &current.handler {
            Some(handler) => Ok(RouteMatch { handler, bindings }),
            None => Err(RouteError::RouteNotFound {
                path: path.to_string(),
                bindings,
            }),
        }
    }

    /// Literal child first, then the wildcard child.
    fn find_child<'t>(&'t self, node: &Node<H>, segment: &str) -> Option<&'t Node<H>> {
        let literal = node
            .children
            .get(segment)
            .map(|id| &self.nodes[id.0])
            .filter(|child| !child.is_wildcard);
        if literal.is_some() {
            return literal;
        }

        let id = node.wildcard_child?;
        let wildcard = &self.nodes[id.0];
        tracing::trace!(segment = %segment, wildcard = %wildcard.segment, "Falling back to wildcard");
        Some(wildcard)
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node<H>> {
        self.nodes.get(id.0)
    }

    pub fn root(&self) -> &Node<H> {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Rebuild the normalised template for a node, e.g. `/users/{id}`.
    pub fn template_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut cursor = self.nodes.get(id.0);
        while let Some(node) = cursor {
            if node.parent.is_none() {
                break;
            }
            parts.push(node.segment.as_str());
            cursor = node.parent.and_then(|p| self.nodes.get(p.0));
        }
        parts.reverse();

        let mut template = String::new();
        for part in parts {
            template.push(DELIMITER);
            template.push_str(part);
        }
        if template.is_empty() {
            template.push(DELIMITER);
        }
        template
    }

    /// All registered routes with their handlers, sorted by template.
    pub fn routes(&self) -> Vec<(String, &H)> {
        let mut routes: Vec<(String, &H)> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| {
                node.handler
                    .as_ref()
                    .map(|handler| (self.template_of(NodeId(i)), handler))
            })
            .collect();
        routes.sort_by(|a, b| a.0.cmp(&b.0));
        routes
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trie(routes: &[(&str, u32)]) -> RouteTrie<u32> {
        let mut trie = RouteTrie::new();
        for (template, handler) in routes {
            trie.append_route(template, *handler).unwrap();
        }
        trie
    }

    #[test]
    fn test_new_trie_is_empty() {
        let trie: RouteTrie<u32> = RouteTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.root().handler().is_none());
        assert_eq!(trie.root().segment(), "");
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let trie = trie(&[("/a/b", 1), ("/a/c", 2)]);
        // root, a, b, c
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.root().child_count(), 1);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_wildcard_bookkeeping() {
        let trie = trie(&[("/users/{id}", 1)]);
        let users = trie.node(NodeId(1)).unwrap();
        assert_eq!(users.segment(), "users");
        assert!(users.has_wildcard_child());

        let id = trie.node(NodeId(2)).unwrap();
        assert!(id.is_wildcard());
        assert_eq!(id.segment(), "{id}");
        assert_eq!(id.capture_name(), Some("id"));
        assert_eq!(id.parent(), Some(NodeId(1)));
        assert_eq!(id.handler(), Some(&1));
    }

    #[test]
    fn test_same_wildcard_is_reused() {
        let trie = trie(&[("/a/{x}", 1), ("/a/{x}/b", 2)]);
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.match_path("/a/1/b").unwrap().handler, &2);
    }

    #[test]
    fn test_second_wildcard_rejected() {
        let mut trie = trie(&[("/a/{x}", 1)]);
        let err = trie.append_route("/a/{y}/z", 2).unwrap_err();
        assert_eq!(
            err,
            RouteError::OnlyOneWildcard {
                template: "/a/{y}/z".into(),
                existing: "{x}".into(),
                rejected: "{y}".into(),
            }
        );
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_prefix_can_be_registered_later() {
        let mut trie = trie(&[("/a/b/c", 1)]);
        trie.append_route("/a/b", 2).unwrap();
        assert_eq!(trie.match_path("/a/b").unwrap().handler, &2);
        assert_eq!(trie.match_path("/a/b/c").unwrap().handler, &1);
    }

    #[test]
    fn test_duplicate_with_different_delimiters() {
        let mut trie = trie(&[("a/b", 1)]);
        let err = trie.append_route("//a/b/", 2).unwrap_err();
        assert_eq!(
            err,
            RouteError::RouteAlreadyExists {
                template: "//a/b/".into()
            }
        );
        assert_eq!(trie.match_path("/a/b").unwrap().handler, &1);
    }

    #[test]
    fn test_root_never_gets_handler() {
        let mut trie: RouteTrie<u32> = RouteTrie::new();
        assert!(matches!(
            trie.append_route("/", 1),
            Err(RouteError::CannotAppendRoute { .. })
        ));
        assert!(matches!(
            trie.append_route("  ", 1),
            Err(RouteError::CannotAppendRoute { .. })
        ));
        assert!(trie.root().handler().is_none());
        assert!(trie.match_path("/").is_err());
    }

    #[test]
    fn test_literal_preferred_over_wildcard() {
        let trie = trie(&[("/users/{id}", 1), ("/users/me", 2)]);
        let found = trie.match_path("/users/me").unwrap();
        assert_eq!(found.handler, &2);
        assert!(found.bindings.is_empty());

        let found = trie.match_path("/users/7").unwrap();
        assert_eq!(found.handler, &1);
        assert_eq!(found.param("id"), Some("7"));
    }

    #[test]
    fn test_literal_segment_does_not_enter_wildcard_on_insert() {
        let trie = trie(&[("/a/{x}", 1), ("/a/b", 2)]);
        // root, a, {x}, b
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_no_backtracking() {
        let trie = trie(&[("/a/{x}/c", 1), ("/a/b/d", 2)]);
        // Literal `b` wins at level two, and `b` has no `c` child.
        let err = trie.match_path("/a/b/c").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(trie.match_path("/a/z/c").unwrap().handler, &1);
    }

    #[test]
    fn test_not_found_keeps_partial_bindings() {
        let trie = trie(&[("/users/{id}/posts", 1)]);
        match trie.match_path("/users/42/comments") {
            Err(RouteError::RouteNotFound { path, bindings }) => {
                assert_eq!(path, "/users/42/comments");
                assert_eq!(bindings.get("id").map(String::as_str), Some("42"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_brace_text_in_path_goes_through_wildcard() {
        let trie = trie(&[("/a/{x}", 1)]);
        let found = trie.match_path("/a/{x}").unwrap();
        assert_eq!(found.param("x"), Some("{x}"));
    }

    #[test]
    fn test_repeated_capture_name_last_wins() {
        let trie = trie(&[("/{id}/items/{id}", 1)]);
        let found = trie.match_path("/1/items/2").unwrap();
        assert_eq!(found.bindings.len(), 1);
        assert_eq!(found.param("id"), Some("2"));
    }

    #[test]
    fn test_template_of_and_routes() {
        let trie = trie(&[("users/{id}/", 1), ("/about", 2), ("/users", 3)]);
        let routes: Vec<(String, u32)> = trie
            .routes()
            .into_iter()
            .map(|(t, h)| (t, *h))
            .collect();
        assert_eq!(
            routes,
            vec![
                ("/about".to_string(), 2),
                ("/users".to_string(), 3),
                ("/users/{id}".to_string(), 1),
            ]
        );
        assert_eq!(trie.template_of(NodeId::ROOT), "/");
    }
}
