//! Router that accepts registrations while serving lookups

use crate::matcher::{method_path, RouteMatch};
use crate::trie::PathTrie;
use http::Method;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use waypoint_core::{Result, RouteId};

/// Trie behind a reader-writer lock
///
/// Use this only when routes are added after serving starts; otherwise
/// prefer [`RouterBuilder`](crate::RouterBuilder), whose frozen router needs
/// no locking.
#[derive(Debug, Clone, Default)]
pub struct SharedRouter {
    trie: Arc<RwLock<PathTrie>>,
}

impl SharedRouter {
    /// Create an empty shared router
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path, returning the id it replaced
    pub fn add(&self, path: &str, id: RouteId) -> Result<Option<RouteId>> {
        self.trie.write().insert(path, id)
    }

    /// Look up a concrete path
    pub fn find(&self, path: &str) -> Option<RouteMatch> {
        self.trie.read().find(path)
    }

    /// Look up a request by method and path
    pub fn find_request(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        self.find(&method_path(method, path))
    }

    /// Every registered path
    pub fn routes(&self) -> BTreeMap<String, RouteId> {
        self.trie.read().routes()
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.trie.read().len()
    }

    /// Check if no path is registered
    pub fn is_empty(&self) -> bool {
        self.trie.read().is_empty()
    }
}
