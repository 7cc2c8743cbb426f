//! # Waypoint Router
//!
//! Segment trie router mapping request paths to integer route ids:
//! - Literal segments (`/user/password`)
//! - Named captures (`/user/::id`)
//! - Method-prefixed paths sharing one trie (`GET/user/::id`)
//! - Conflict detection for differently named captures
//!
//! ## Lookup rules
//!
//! - O(k) in the number of segments
//! - Literal children win over the wildcard child at each level
//! - No backtracking once a level is committed
//! - A path that only prefixes registered routes does not match
//!
//! Routes are added to a [`RouterBuilder`] and frozen into a [`Router`],
//! which is immutable and cheap to share between threads.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod matcher;
pub mod segment;
pub mod shared;
pub mod trie;

pub use matcher::{method_path, RouteMatch};
pub use segment::Segment;
pub use shared::SharedRouter;
pub use trie::PathTrie;

use http::Method;
use std::collections::BTreeMap;
use std::sync::Arc;
use waypoint_core::{Result, RouteId};

/// Mutable registration phase of a router
#[derive(Debug, Default)]
pub struct RouterBuilder {
    trie: PathTrie,
}

impl RouterBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path
    ///
    /// Returns the id previously bound to the same path, if any. The new id
    /// always replaces it; rejecting duplicates is the caller's decision.
    pub fn add(&mut self, path: &str, id: RouteId) -> Result<Option<RouteId>> {
        self.trie.insert(path, id)
    }

    /// Register a path for one HTTP method
    pub fn add_request(
        &mut self,
        method: &Method,
        path: &str,
        id: RouteId,
    ) -> Result<Option<RouteId>> {
        self.add(&method_path(method, path), id)
    }

    /// Id already registered for exactly this route path
    ///
    /// Returns the error [`add`](Self::add) would fail with, without changing
    /// anything.
    pub fn lookup(&self, path: &str) -> Result<Option<RouteId>> {
        self.trie.lookup(path)
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if no path is registered
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Every registered path
    pub fn routes(&self) -> BTreeMap<String, RouteId> {
        self.trie.routes()
    }

    /// Freeze into a read-only router
    pub fn build(self) -> Router {
        Router {
            trie: Arc::new(self.trie),
        }
    }
}

/// Read-only router
#[derive(Debug, Clone, Default)]
pub struct Router {
    trie: Arc<PathTrie>,
}

impl Router {
    /// Start registering routes
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Look up a concrete path
    pub fn find(&self, path: &str) -> Option<RouteMatch> {
        self.trie.find(path)
    }

    /// Look up a request by method and path
    pub fn find_request(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        self.find(&method_path(method, path))
    }

    /// Every registered path, for diagnostics
    pub fn routes(&self) -> BTreeMap<String, RouteId> {
        self.trie.routes()
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if no path is registered
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
