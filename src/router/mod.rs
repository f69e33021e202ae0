//! Hash-based client routing.
//!
//! ARCHITECTURE
//! ============
//! `table` maps paths to views, `location` reads and writes the URL hash, and
//! `guard` decides whether a navigation may proceed. `Navigator` is the
//! context handle views use to move between routes.

pub mod guard;
pub mod location;
pub mod table;


use leptos::prelude::*;

use self::location::HashLocation;

/// Context handle over the current hash location.
#[derive(Clone, Copy)]
pub struct Navigator {
    location: RwSignal<HashLocation>,
}

impl Navigator {
    /// Start from the page's current hash.
    pub fn from_window() -> Self {
        Self { location: RwSignal::new(HashLocation::current()) }
    }

    /// Reactive current location.
    pub fn location(&self) -> ReadSignal<HashLocation> {
        self.location.read_only()
    }

    /// Adopt the location the browser now shows, e.g. after `hashchange`.
    pub fn sync_from_window(&self) {
        let current = HashLocation::current();
        if self.location.with_untracked(|loc| *loc != current) {
            self.location.set(current);
        }
    }

    /// Navigate to `path`, adding a history entry.
    pub fn push(&self, path: &str) {
        let target = HashLocation::parse(path);
        if write_hash(&target, false) {
            self.location.set(target);
        }
    }

    /// Navigate to `path` without adding a history entry.
    pub fn replace(&self, path: &str) {
        let target = HashLocation::parse(path);
        if write_hash(&target, true) {
            self.location.set(target);
        }
    }
}

/// Show `target` in the address bar. `false` when the browser refused, in
/// which case the in-app location must stay where it is.
#[cfg(feature = "csr")]
fn write_hash(target: &HashLocation, replace: bool) -> bool {
    let Some(window) = web_sys::window() else {
        log::warn!("navigation to {} skipped: no window", target.path);
        return false;
    };
    let location = window.location();
    let result = if replace {
        location.href().and_then(|href| {
            let base = href.split_once('#').map_or(href.as_str(), |(base, _)| base);
            location.replace(&format!("{base}{}", target.to_hash()))
        })
    } else {
        location.set_hash(&target.to_hash())
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("navigation to {} failed: {e:?}", target.path);
            false
        }
    }
}

#[cfg(not(feature = "csr"))]
fn write_hash(_target: &HashLocation, _replace: bool) -> bool {
    true
}
