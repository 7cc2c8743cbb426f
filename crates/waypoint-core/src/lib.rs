//! # Waypoint Core
//!
//! Core types and error handling shared by the Waypoint crates:
//! - Error types
//! - Route identifiers
//! - Captured path parameters

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod params;
pub mod types;

pub use error::{Error, Result};
pub use params::Params;
pub use types::{RouteId, WILDCARD};
