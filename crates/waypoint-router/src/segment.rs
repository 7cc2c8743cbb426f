//! Path splitting and segment classification

use waypoint_core::WILDCARD;

/// One `/`-separated piece of a route path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Matched verbatim
    Literal(&'a str),
    /// Matches any text and captures it under this name
    Param(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a raw segment; `::name` is a capture, anything else is literal
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix(WILDCARD) {
            Some(name) => Segment::Param(name),
            None => Segment::Literal(raw),
        }
    }
}

/// Split a path into segments
///
/// One leading and one trailing `/` are dropped first, so `/` and the empty
/// string both yield a single empty segment.
pub fn split_path(path: &str) -> std::str::Split<'_, char> {
    let path = path.strip_suffix('/').unwrap_or(path);
    let path = path.strip_prefix('/').unwrap_or(path);
    path.split('/')
}

/// Parse every segment of a route path
pub fn parse_path(path: &str) -> Vec<Segment<'_>> {
    split_path(path).map(Segment::parse).collect()
}
