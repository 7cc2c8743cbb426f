//! Controller declarations

/// One routable method of a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Action name, appended to the controller base path by default
    pub name: String,

    /// Doc text scanned for `@route` annotations
    pub doc: Option<String>,
}

impl Action {
    /// Action routed at `<base>/<name>`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    /// Action whose doc text may override its routes
    pub fn documented(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Some(doc.into()),
        }
    }
}

/// A controller and the actions it exposes
///
/// `provider` is whatever the caller dispatches to, typically a factory
/// producing a fresh handler per request.
#[derive(Debug, Clone)]
pub struct Controller<H> {
    /// Bundle (module) the controller belongs to
    pub bundle: String,

    /// Controller name
    pub name: String,

    /// Handler provider
    pub provider: H,

    /// Declared actions
    pub actions: Vec<Action>,
}

impl<H> Controller<H> {
    /// Create a controller with no actions
    pub fn new(bundle: impl Into<String>, name: impl Into<String>, provider: H) -> Self {
        Self {
            bundle: bundle.into(),
            name: name.into(),
            provider,
            actions: Vec::new(),
        }
    }

    /// Add an action routed by name
    pub fn action(mut self, name: impl Into<String>) -> Self {
        self.actions.push(Action::new(name));
        self
    }

    /// Add an action with doc text
    pub fn documented_action(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.actions.push(Action::documented(name, doc));
        self
    }

    /// `bundle.name`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.bundle, self.name)
    }
}

/// Controller part (`bundle.controller`) of a `bundle.controller.action` name
pub fn controller_of(action: &str) -> Option<&str> {
    action.rsplit_once('.').map(|(controller, _)| controller)
}
