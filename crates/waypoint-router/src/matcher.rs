//! Match results and method-prefixed lookup paths

use http::Method;
use waypoint_core::{Params, RouteId};

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Id of the matched route
    pub id: RouteId,

    /// Values captured by wildcard segments
    pub params: Params,
}

impl RouteMatch {
    /// Create a new match result
    pub fn new(id: RouteId, params: Params) -> Self {
        Self { id, params }
    }
}

/// Fold an HTTP method into a path so both share one trie, e.g. `GET/user/42`
pub fn method_path(method: &Method, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", method.as_str(), path)
    } else {
        format!("{}/{}", method.as_str(), path)
    }
}
