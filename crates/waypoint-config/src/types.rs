//! Configuration types

use serde::{Deserialize, Serialize};

/// Route table file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RouteTableConfig {
    /// Routes, registered in order
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One route declaration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Route spec, e.g. `{get|post}/user/::id`
    pub route: String,

    /// Action name, `bundle.controller.action`
    pub action: String,
}

impl RouteEntry {
    /// Create a route entry
    pub fn new(route: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            action: action.into(),
        }
    }
}
