//! Route specs of the form `{get|post}/path`

use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use waypoint_core::{Error, Result};

static SPEC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:@route\s+)?\{([^}]*)\}(.*)$").expect("route spec regex is valid")
});

static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@route\s+(\{[^}\n]*\}[/\w:\-]*)").expect("route annotation regex is valid")
});

/// Methods and path declared for one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    /// HTTP methods, one trie entry each
    pub methods: Vec<Method>,

    /// Path pattern, e.g. `/user/::id`
    pub path: String,
}

impl FromStr for RouteSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = SPEC_RE.captures(s.trim()).ok_or_else(|| {
            Error::InvalidRoute(format!("'{s}' is not of the form {{methods}}/path"))
        })?;

        let methods = caps[1]
            .split('|')
            .map(|m| {
                let m = m.trim().to_uppercase();
                if m.is_empty() {
                    return Err(Error::InvalidRoute(format!("'{s}' has an empty method")));
                }
                Method::from_bytes(m.as_bytes())
                    .map_err(|_| Error::InvalidRoute(format!("'{s}' has invalid method '{m}'")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            methods,
            path: caps[2].trim().to_string(),
        })
    }
}

impl fmt::Display for RouteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<&str> = self.methods.iter().map(Method::as_str).collect();
        write!(f, "{{{}}}{}", methods.join("|").to_lowercase(), self.path)
    }
}

/// Extract every `@route {methods}/path` annotation from doc text
pub fn route_annotations(doc: &str) -> Vec<String> {
    ANNOTATION_RE
        .captures_iter(doc)
        .map(|caps| caps[1].to_string())
        .collect()
}
