//! Static route table and path matching.
//!
//! Patterns are `/`-separated; a `:name` segment captures exactly one
//! non-empty path segment. Empty segments are ignored on both sides, so a
//! trailing slash is optional, and static segments compare ASCII
//! case-insensitively. The first matching entry wins.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Screens reachable through the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Dashboard,
    ItemCreate,
    ItemDetail,
    Feedback,
    Todo,
    Stats,
    Logs,
    Groups,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/login", view: View::Login },
    RouteEntry { path: "/", view: View::Dashboard },
    RouteEntry { path: "/item/create", view: View::ItemCreate },
    RouteEntry { path: "/item/detail/:id", view: View::ItemDetail },
    RouteEntry { path: "/feedback/:itemId", view: View::Feedback },
    RouteEntry { path: "/todo", view: View::Todo },
    RouteEntry { path: "/stats", view: View::Stats },
    RouteEntry { path: "/logs", view: View::Logs },
    RouteEntry { path: "/groups", view: View::Groups },
];

/// A resolved route with its captured parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: View,
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Resolve `path` against [`ROUTES`].
pub fn resolve(path: &str) -> Option<RouteMatch> {
    ROUTES.iter().find_map(|entry| {
        match_pattern(entry.path, path).map(|params| RouteMatch { view: entry.view, params })
    })
}

fn match_pattern(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    let mut params = Vec::new();

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.push((name.to_owned(), actual.to_owned()));
                } else if !expected.eq_ignore_ascii_case(actual) {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
