//! Configuration validation

use crate::RouteTableConfig;
use waypoint_core::{Error, Result};

/// Validate a route table
pub fn validate_config(config: &RouteTableConfig) -> Result<()> {
    if config.routes.is_empty() {
        tracing::warn!("Route table has no routes");
    }

    for (index, entry) in config.routes.iter().enumerate() {
        let route = entry.route.trim();
        if !route.starts_with('{') || !route.contains('}') {
            return Err(Error::Config(format!(
                "routes[{index}]: route '{}' must look like {{methods}}/path",
                entry.route
            )));
        }

        let parts: Vec<&str> = entry.action.split('.').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(Error::Config(format!(
                "routes[{index}]: action '{}' must be bundle.controller.action",
                entry.action
            )));
        }
    }

    Ok(())
}
