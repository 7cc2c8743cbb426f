//! # Waypoint Registry
//!
//! Explicit route registration on top of the trie router:
//! - Route specs with method groups (`{get|post}/login`)
//! - Controllers whose actions default to `<base>/<Action>`
//! - `@route` annotations overriding the default route
//! - Sequential route ids and duplicate-route rejection
//! - Resolution of a request back to its action and controller

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod controller;
pub mod listing;
pub mod spec;

pub use controller::{controller_of, Action, Controller};
pub use listing::{action_tree, format_listing, ActionTree};
pub use spec::{route_annotations, RouteSpec};

use http::Method;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use waypoint_core::{Error, Params, Result, RouteId};
use waypoint_router::{method_path, PathTrie, Router, RouterBuilder};

/// Decides whether an action name becomes routable
pub type ActionFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Registration phase: collects routes, actions, and controllers
pub struct Registry<H = ()> {
    router: RouterBuilder,
    actions: BTreeMap<RouteId, String>,
    controllers: HashMap<String, H>,
    filter: Option<ActionFilter>,
    next_id: usize,
}

impl<H> Registry<H> {
    /// Create an empty registry accepting every action
    pub fn new() -> Self {
        Self {
            router: RouterBuilder::new(),
            actions: BTreeMap::new(),
            controllers: HashMap::new(),
            filter: None,
            next_id: 1,
        }
    }

    /// Only route actions for which `filter` returns true
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Register `spec` (e.g. `{get|post}/login`) for `action`
    ///
    /// One id is allocated per method. Fails if any of the resulting paths is
    /// already bound, in which case nothing is registered.
    pub fn add_route(&mut self, spec: &str, action: impl Into<String>) -> Result<Vec<RouteId>> {
        let spec: RouteSpec = spec.parse()?;
        self.add_spec(&spec, action)
    }

    /// Register an already parsed spec
    pub fn add_spec(
        &mut self,
        spec: &RouteSpec,
        action: impl Into<String>,
    ) -> Result<Vec<RouteId>> {
        let action = action.into();
        let planned = self.plan(
            spec.methods
                .iter()
                .map(|method| (method_path(method, &spec.path), action.as_str())),
        )?;
        self.commit(planned)
    }

    /// Register a controller under `base_path` (e.g. `{get}/search`)
    ///
    /// Each action accepted by the filter is routed by its `@route`
    /// annotations, or at `base_path/<Action>` when it has none. Either every
    /// route and the provider are registered, or none of them.
    pub fn add_controller(&mut self, base_path: &str, controller: Controller<H>) -> Result<()> {
        let full_name = controller.full_name();
        let base = base_path.strip_suffix('/').unwrap_or(base_path);

        let mut specs: Vec<(RouteSpec, String)> = Vec::new();
        for action in &controller.actions {
            if !self.allows(&action.name) {
                tracing::trace!(
                    controller = %full_name,
                    action = %action.name,
                    "Action filtered out"
                );
                continue;
            }

            let action_name = format!("{full_name}.{}", action.name);
            let annotated = action
                .doc
                .as_deref()
                .map(route_annotations)
                .unwrap_or_default();

            if annotated.is_empty() {
                specs.push((format!("{base}/{}", action.name).parse()?, action_name));
            } else {
                for route in &annotated {
                    specs.push((route.parse()?, action_name.clone()));
                }
            }
        }

        let planned = self.plan(specs.iter().flat_map(|(spec, action)| {
            spec.methods
                .iter()
                .map(move |method| (method_path(method, &spec.path), action.as_str()))
        }))?;
        self.commit(planned)?;
        self.controllers.insert(full_name.clone(), controller.provider);

        tracing::debug!(controller = %full_name, "Controller registered");

        Ok(())
    }

    /// Check a batch of `(path, action)` pairs without touching the registry
    ///
    /// The batch is first replayed into a scratch trie, which catches wildcard
    /// and path clashes inside the batch, then each path is checked against
    /// the routes already registered. Repeating a path for the same action
    /// is collapsed.
    fn plan<'a>(
        &self,
        entries: impl IntoIterator<Item = (String, &'a str)>,
    ) -> Result<Vec<(String, String)>> {
        let mut batch = PathTrie::new();
        let mut planned: Vec<(String, String)> = Vec::new();

        for (path, action) in entries {
            let slot = RouteId::new(planned.len() + 1)
                .ok_or_else(|| Error::InvalidRoute("route id space exhausted".to_string()))?;

            if let Some(previous) = batch.insert(&path, slot)? {
                batch.insert(&path, previous)?;
                let existing = &planned[previous.get() - 1].1;
                if existing == action {
                    continue;
                }
                return Err(route_conflict(path, existing.clone(), action));
            }

            if let Some(existing) = self.router.lookup(&path)? {
                let existing = self.actions.get(&existing).cloned().unwrap_or_default();
                return Err(route_conflict(path, existing, action));
            }

            planned.push((path, action.to_string()));
        }

        Ok(planned)
    }

    fn commit(&mut self, planned: Vec<(String, String)>) -> Result<Vec<RouteId>> {
        let mut ids = Vec::with_capacity(planned.len());

        for (path, action) in planned {
            let id = RouteId::new(self.next_id)
                .ok_or_else(|| Error::InvalidRoute("route id space exhausted".to_string()))?;

            self.router.add(&path, id)?;
            tracing::debug!(path = %path, action = %action, id = %id, "Route registered");

            self.actions.insert(id, action);
            self.next_id += 1;
            ids.push(id);
        }

        Ok(ids)
    }

    fn allows(&self, action: &str) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(action))
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.router.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.router.is_empty()
    }

    /// Freeze into a dispatcher
    pub fn build(self) -> Dispatcher<H> {
        tracing::info!(
            routes = self.router.len(),
            controllers = self.controllers.len(),
            "Route table built"
        );

        Dispatcher {
            router: self.router.build(),
            actions: self.actions,
            controllers: self.controllers,
        }
    }
}

fn route_conflict(path: String, existing: String, action: &str) -> Error {
    tracing::warn!(path = %path, existing = %existing, action = %action, "Route conflict");
    Error::RouteConflict {
        path,
        existing,
        action: action.to_string(),
    }
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: fmt::Debug> fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("router", &self.router)
            .field("actions", &self.actions)
            .field("controllers", &self.controllers)
            .field("filtered", &self.filter.is_some())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// A request resolved to its action
#[derive(Debug)]
pub struct Resolved<'a, H> {
    /// Route id
    pub id: RouteId,

    /// `bundle.controller.action`
    pub action: &'a str,

    /// Provider of the action's controller, if one was registered
    pub controller: Option<&'a H>,

    /// Captured parameters
    pub params: Params,
}

/// Read-only route table
#[derive(Debug, Clone)]
pub struct Dispatcher<H = ()> {
    router: Router,
    actions: BTreeMap<RouteId, String>,
    controllers: HashMap<String, H>,
}

impl<H> Dispatcher<H> {
    /// Resolve a request by method and path
    pub fn resolve(&self, method: &Method, path: &str) -> Option<Resolved<'_, H>> {
        self.resolve_path(&method_path(method, path))
    }

    /// Resolve a method-prefixed path such as `GET/user/42`
    pub fn resolve_path(&self, path: &str) -> Option<Resolved<'_, H>> {
        let matched = self.router.find(path)?;
        let action = self.actions.get(&matched.id)?.as_str();
        let controller = controller_of(action).and_then(|name| self.controllers.get(name));

        Some(Resolved {
            id: matched.id,
            action,
            controller,
            params: matched.params,
        })
    }

    /// Action bound to a route id
    pub fn action(&self, id: RouteId) -> Option<&str> {
        self.actions.get(&id).map(String::as_str)
    }

    /// Registered controllers by `bundle.controller`
    pub fn controllers(&self) -> &HashMap<String, H> {
        &self.controllers
    }

    /// Registered actions grouped by bundle and controller
    pub fn actions(&self) -> ActionTree {
        action_tree(self.actions.values().map(String::as_str))
    }

    /// Every registered path
    pub fn routes(&self) -> BTreeMap<String, RouteId> {
        self.router.routes()
    }

    /// `path => action` lines in registration order
    pub fn route_listing(&self) -> Vec<String> {
        let mut entries: Vec<(String, RouteId)> = self.routes().into_iter().collect();
        entries.sort_by_key(|(_, id)| *id);

        let entries: Vec<(String, &str)> = entries
            .into_iter()
            .map(|(path, id)| (path, self.action(id).unwrap_or_default()))
            .collect();

        format_listing(&entries)
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.router.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.router.is_empty()
    }
}
