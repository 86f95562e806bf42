//! Handler invocation capability.
//!
//! The trie stores handlers without looking at them. Hosting code that
//! wants match-and-call in one step bounds its handler type by [`Handler`].

use crate::routing::error::RouteResult;
use crate::routing::trie::{Bindings, RouteTrie};

/// Something that can be invoked with the bindings of a match.
pub trait Handler: Send + Sync {
    type Output;

    fn call(&self, bindings: &Bindings) -> Self::Output;
}

impl<F, O> Handler for F
where
    F: Fn(&Bindings) -> O + Send + Sync,
{
    type Output = O;

    fn call(&self, bindings: &Bindings) -> O {
        self(bindings)
    }
}

impl<H: Handler> RouteTrie<H> {
    /// Match `path` and invoke the bound handler with its bindings.
    pub fn dispatch(&self, path: &str) -> RouteResult<H::Output> {
        let found = self.match_path(path)?;
        Ok(found.handler.call(&found.bindings))
    }
}
