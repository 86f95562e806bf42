//! Routing error definitions.

use thiserror::Error;

use crate::routing::trie::Bindings;

/// Errors returned by route registration and path matching.
///
/// None of these are transient. Registration errors point at a broken
/// route table; `RouteNotFound` is the normal outcome for an unknown path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The template's final node already carries a handler.
    #[error("route already exists: {template}")]
    RouteAlreadyExists { template: String },

    /// No registered route matches the path.
    ///
    /// `bindings` holds whatever was captured before the walk stopped.
    #[error("route not found: {path}")]
    RouteNotFound { path: String, bindings: Bindings },

    /// The template has no usable segments.
    #[error("cannot append route: template {template:?} has no segments")]
    CannotAppendRoute { template: String },

    /// A second, differently named wildcard under the same parent.
    #[error("only one wildcard is allowed per level: {template} ({rejected} conflicts with {existing})")]
    OnlyOneWildcard {
        template: String,
        existing: String,
        rejected: String,
    },
}

impl RouteError {
    /// True for the per-request failure kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::RouteNotFound { .. })
    }

    /// True for errors raised while registering routes.
    pub fn is_configuration_error(&self) -> bool {
        !self.is_not_found()
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::RouteAlreadyExists { .. } => "already_exists",
            RouteError::RouteNotFound { .. } => "not_found",
            RouteError::CannotAppendRoute { .. } => "cannot_append",
            RouteError::OnlyOneWildcard { .. } => "only_one_wildcard",
        }
    }
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
