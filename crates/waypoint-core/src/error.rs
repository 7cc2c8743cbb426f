//! Error types for Waypoint

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for Waypoint
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two routes bind different names to the same wildcard position
    #[error("route path <{path}> got error: the parameter <{param}> must be named <{bound}>")]
    ParamConflict {
        /// Path being registered
        path: String,
        /// Name used by the rejected path
        param: String,
        /// Name already bound at that position
        bound: String,
    },

    /// Malformed route or route spec
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// A path is already registered to another action
    #[error("Route conflict on '{path}': already bound to '{existing}', cannot bind '{action}'")]
    RouteConflict {
        /// Full path (method included)
        path: String,
        /// Action owning the path
        existing: String,
        /// Action that attempted to register it
        action: String,
    },

    /// Captured parameter could not be converted
    #[error("Parameter '{name}' has invalid value '{value}'")]
    InvalidParam {
        /// Parameter name
        name: String,
        /// Captured text
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a wildcard naming conflict
    pub fn param_conflict(
        path: impl Into<String>,
        param: impl Into<String>,
        bound: impl Into<String>,
    ) -> Self {
        Error::ParamConflict {
            path: path.into(),
            param: param.into(),
            bound: bound.into(),
        }
    }

    /// Whether this error is fatal to route registration
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            Error::ParamConflict { .. } | Error::InvalidRoute(_) | Error::RouteConflict { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_conflict_message() {
        let err = Error::param_conflict("/::b/y", "b", "a");
        assert_eq!(
            err.to_string(),
            "route path </::b/y> got error: the parameter <b> must be named <a>"
        );
        assert!(err.is_registration_error());
    }

    #[test]
    fn test_route_conflict_message() {
        let err = Error::RouteConflict {
            path: "GET/login".to_string(),
            existing: "user.Account.Login".to_string(),
            action: "user.Session.Create".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("GET/login"));
        assert!(msg.contains("user.Account.Login"));
        assert!(msg.contains("user.Session.Create"));
    }

    #[test]
    fn test_config_error_not_registration() {
        assert!(!Error::Config("bad".to_string()).is_registration_error());
    }
}
