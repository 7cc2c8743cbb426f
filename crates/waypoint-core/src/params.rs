//! Parameters captured by wildcard segments

use crate::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Map of wildcard name to the path text captured at that position
///
/// A fresh map is produced for every successful match and handed to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(HashMap<String, String>);

impl Params {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a captured value, replacing an earlier capture of the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a captured value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Parse a captured value as an integer
    pub fn get_int(&self, name: &str) -> Result<i64> {
        self.parse(name)
    }

    /// Parse a captured value into any `FromStr` type
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<T> {
        let value = self.get(name).unwrap_or_default();
        value.parse().map_err(|_| Error::InvalidParam {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Number of captures
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
