//! Hash-history location handling.
//!
//! The app path lives after `#` in the page URL (`/#/item/detail/7?tab=log`),
//! so navigation never reloads the page or hits the server.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashLocation {
    /// Always starts with `/`.
    pub path: String,
    pub query: Option<String>,
}

impl HashLocation {
    /// Parse a `location.hash` value; `""` and `"#"` are the root path.
    pub fn parse(hash: &str) -> Self {
        let raw = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query.to_owned())),
            None => (raw, None),
        };
        Self { path: normalize_path(path), query: query.filter(|q| !q.is_empty()) }
    }

    /// `#`-prefixed form suitable for `location.hash`.
    pub fn to_hash(&self) -> String {
        match &self.query {
            Some(query) => format!("#{}?{query}", self.path),
            None => format!("#{}", self.path),
        }
    }

    /// Current `window.location.hash`; the root path off-browser.
    pub fn current() -> Self {
        #[cfg(feature = "csr")]
        {
            if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
                return Self::parse(&hash);
            }
        }
        Self::parse("")
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
