//! Segment trie storing route ids

use crate::matcher::RouteMatch;
use crate::segment::{parse_path, split_path, Segment};
use std::collections::{BTreeMap, HashMap};
use waypoint_core::{Error, Params, Result, RouteId, WILDCARD};

/// Node in the route trie
#[derive(Debug, Default)]
struct TrieNode {
    /// Route terminating at this node
    id: Option<RouteId>,

    /// Capture name when reached through a wildcard, empty otherwise
    param: String,

    /// Literal children
    children: HashMap<String, TrieNode>,

    /// Wildcard child; every route through it shares its `param`
    wildcard: Option<Box<TrieNode>>,
}

impl TrieNode {
    fn with_param(param: &str) -> Self {
        Self {
            param: param.to_string(),
            ..Self::default()
        }
    }
}

fn parse_route(path: &str) -> Result<Vec<Segment<'_>>> {
    let segments = parse_path(path);

    if segments.iter().any(|s| *s == Segment::Param("")) {
        return Err(Error::InvalidRoute(format!(
            "route path <{path}> has a wildcard without a name"
        )));
    }

    Ok(segments)
}

/// Trie of `/`-separated path segments mapping full paths to route ids
///
/// Lookups commit to a literal child before trying the wildcard child at each
/// level and never backtrack to an earlier level.
#[derive(Debug, Default)]
pub struct PathTrie {
    root: TrieNode,
    count: usize,
}

impl PathTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` under `id`
    ///
    /// Returns the id previously stored for the same path, which is replaced.
    /// Fails when a `::name` segment sits where a different name is already
    /// bound; nodes created before the conflicting segment are kept.
    pub fn insert(&mut self, path: &str, id: RouteId) -> Result<Option<RouteId>> {
        let segments = parse_route(path)?;
        let mut current = &mut self.root;

        for segment in segments {
            current = match segment {
                Segment::Literal(literal) => current
                    .children
                    .entry(literal.to_string())
                    .or_default(),
                Segment::Param(name) => {
                    let child = current
                        .wildcard
                        .get_or_insert_with(|| Box::new(TrieNode::with_param(name)));
                    if child.param != name {
                        return Err(Error::param_conflict(path, name, child.param.as_str()));
                    }
                    child.as_mut()
                }
            };
        }

        let previous = current.id.replace(id);
        if previous.is_none() {
            self.count += 1;
        }

        Ok(previous)
    }

    /// Id registered for exactly this route path, without modifying the trie
    ///
    /// `::name` segments only follow a wildcard bound to the same name. Fails
    /// with the same errors [`insert`](Self::insert) would return for `path`.
    pub fn lookup(&self, path: &str) -> Result<Option<RouteId>> {
        let mut current = &self.root;

        for segment in parse_route(path)? {
            let next = match segment {
                Segment::Literal(literal) => current.children.get(literal),
                Segment::Param(name) => match current.wildcard.as_deref() {
                    Some(child) if child.param != name => {
                        return Err(Error::param_conflict(path, name, child.param.as_str()));
                    }
                    child => child,
                },
            };

            match next {
                Some(node) => current = node,
                None => return Ok(None),
            }
        }

        Ok(current.id)
    }

    /// Look up a concrete path
    pub fn find(&self, path: &str) -> Option<RouteMatch> {
        let mut current = &self.root;
        let mut params = Params::new();

        for segment in split_path(path) {
            if let Some(next) = current.children.get(segment) {
                current = next;
            } else if let Some(next) = current.wildcard.as_deref() {
                params.insert(next.param.as_str(), segment);
                current = next;
            } else {
                return None;
            }
        }

        // A node without an id is only a prefix of longer routes
        current.id.map(|id| RouteMatch::new(id, params))
    }

    /// Every registered path, wildcards rendered as `::name`
    pub fn routes(&self) -> BTreeMap<String, RouteId> {
        let mut routes = BTreeMap::new();
        Self::collect_routes(&self.root, "", &mut routes);
        routes
    }

    fn collect_routes(node: &TrieNode, prefix: &str, routes: &mut BTreeMap<String, RouteId>) {
        let literals = node
            .children
            .iter()
            .map(|(segment, child)| (format!("{prefix}/{segment}"), child));
        let wildcard = node
            .wildcard
            .as_deref()
            .map(|child| (format!("{prefix}/{WILDCARD}{}", child.param), child));

        for (path, child) in literals.chain(wildcard) {
            if let Some(id) = child.id {
                routes.insert(path.clone(), id);
            }
            Self::collect_routes(child, &path, routes);
        }
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if trie is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> RouteId {
        RouteId::new(n).unwrap()
    }

    #[test]
    fn test_insert_and_find_literal() {
        let mut trie = PathTrie::new();
        assert_eq!(trie.insert("/user/password", id(1)).unwrap(), None);

        let matched = trie.find("/user/password").unwrap();
        assert_eq!(matched.id, id(1));
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_single_capture() {
        let mut trie = PathTrie::new();
        trie.insert("/user/::password", id(2)).unwrap();

        let matched = trie.find("/user/123456").unwrap();
        assert_eq!(matched.id, id(2));
        assert_eq!(matched.params.get("password"), Some("123456"));
    }

    #[test]
    fn test_multiple_captures() {
        let mut trie = PathTrie::new();
        trie.insert("/::user/::password/::address", id(6)).unwrap();

        let matched = trie.find("/jaychou/123456/china").unwrap();
        assert_eq!(matched.id, id(6));
        assert_eq!(matched.params.len(), 3);
        assert_eq!(matched.params.get("user"), Some("jaychou"));
        assert_eq!(matched.params.get("password"), Some("123456"));
        assert_eq!(matched.params.get("address"), Some("china"));
    }

    #[test]
    fn test_structural_prefix_does_not_match() {
        let mut trie = PathTrie::new();
        trie.insert("/user/password/address", id(5)).unwrap();

        assert!(trie.find("/user/password").is_none());
        assert!(trie.find("/user").is_none());
        assert!(trie.find("/user/password/address").is_some());
    }

    #[test]
    fn test_overwrite_returns_previous() {
        let mut trie = PathTrie::new();
        assert_eq!(trie.insert("/a/b", id(1)).unwrap(), None);
        assert_eq!(trie.insert("/a/b", id(9)).unwrap(), Some(id(1)));

        assert_eq!(trie.find("/a/b").unwrap().id, id(9));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_wildcard_name_conflict() {
        let mut trie = PathTrie::new();
        trie.insert("/::a/x", id(1)).unwrap();

        let err = trie.insert("/::b/y", id(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::ParamConflict { ref param, ref bound, .. } if param == "b" && bound == "a"
        ));

        // Same name through the same position is fine
        trie.insert("/::a/y", id(3)).unwrap();
        assert_eq!(trie.find("/q/y").unwrap().params.get("a"), Some("q"));
    }

    #[test]
    fn test_conflict_registers_nothing() {
        let mut trie = PathTrie::new();
        trie.insert("/shop/::item", id(1)).unwrap();
        trie.insert("/new/::x/::y", id(2)).unwrap();

        assert!(trie.insert("/new/::z/tail", id(3)).is_err());

        // Still served by the earlier route, never by the rejected one
        assert_eq!(trie.find("/new/anything/tail").map(|m| m.id), Some(id(2)));
        assert!(trie.find("/new/anything").is_none());
        assert!(!trie.routes().values().any(|&v| v == id(3)));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_lookup_exact_route_path() {
        let mut trie = PathTrie::new();
        trie.insert("/user/::id", id(1)).unwrap();
        trie.insert("/user/password", id(2)).unwrap();

        assert_eq!(trie.lookup("/user/::id").unwrap(), Some(id(1)));
        assert_eq!(trie.lookup("/user/password").unwrap(), Some(id(2)));
        // Concrete text does not fall through to the wildcard
        assert_eq!(trie.lookup("/user/42").unwrap(), None);
        assert_eq!(trie.lookup("/user").unwrap(), None);
        assert!(matches!(
            trie.lookup("/user/::name"),
            Err(Error::ParamConflict { .. })
        ));
        assert!(matches!(trie.lookup("/::"), Err(Error::InvalidRoute(_))));

        // Nothing was created by the lookups
        assert_eq!(trie.routes().len(), 2);
        assert!(trie.find("/user").is_none());
    }

    #[test]
    fn test_literal_preferred_without_backtracking() {
        let mut trie = PathTrie::new();
        trie.insert("/user/profile", id(1)).unwrap();
        trie.insert("/::name/settings", id(2)).unwrap();

        // "user" commits to the literal branch, which has no "settings" child
        assert!(trie.find("/user/settings").is_none());
        assert_eq!(trie.find("/other/settings").unwrap().id, id(2));
    }

    #[test]
    fn test_unnamed_wildcard_rejected() {
        let mut trie = PathTrie::new();
        assert!(matches!(
            trie.insert("/user/::", id(1)),
            Err(Error::InvalidRoute(_))
        ));
        assert!(trie.is_empty());
        assert!(trie.routes().is_empty());
    }

    #[test]
    fn test_root_route() {
        let mut trie = PathTrie::new();
        trie.insert("/", id(1)).unwrap();

        assert_eq!(trie.find("/").unwrap().id, id(1));
        assert_eq!(trie.find("").unwrap().id, id(1));
        assert_eq!(trie.routes().get("/"), Some(&id(1)));
    }

    #[test]
    fn test_routes_enumeration() {
        let mut trie = PathTrie::new();
        trie.insert("/user/password", id(1)).unwrap();
        trie.insert("/user/::password", id(2)).unwrap();
        trie.insert("/user", id(3)).unwrap();
        trie.insert("/::user/::password/::address", id(6)).unwrap();
        trie.insert("/only/deep/route", id(7)).unwrap();

        let routes = trie.routes();
        assert_eq!(routes.len(), 5);
        assert_eq!(routes["/user/password"], id(1));
        assert_eq!(routes["/user/::password"], id(2));
        assert_eq!(routes["/user"], id(3));
        assert_eq!(routes["/::user/::password/::address"], id(6));
        assert_eq!(routes["/only/deep/route"], id(7));
        assert!(!routes.contains_key("/only/deep"));
    }
}
