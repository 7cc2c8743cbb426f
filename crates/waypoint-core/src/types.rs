//! Common types used throughout Waypoint

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Prefix marking a path segment as a named capture, e.g. `::id`
pub const WILDCARD: &str = "::";

/// Identifier of a registered route
///
/// Zero is reserved for "no route" and cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(NonZeroUsize);

impl RouteId {
    /// Create a route id, returning `None` for zero
    pub fn new(id: usize) -> Option<Self> {
        NonZeroUsize::new(id).map(Self)
    }

    /// Raw integer value
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_reserved() {
        assert!(RouteId::new(0).is_none());
        assert_eq!(RouteId::new(7).map(RouteId::get), Some(7));
    }

    #[test]
    fn test_serializes_as_integer() {
        let id = RouteId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(id.to_string(), "42");
    }
}
