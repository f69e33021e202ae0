//! Global navigation guard.
//!
//! Runs before every route transition. Token presence is the only check:
//! no role gating and no expiry or signature validation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    /// Replace the current location with this path.
    Redirect(&'static str),
}

/// Decide whether navigation to `to_path` may proceed.
///
/// `to_path` is the location path without its query string. Anonymous users
/// are sent to [`LOGIN_PATH`] from anywhere except the login path itself.
pub fn before_each(to_path: &str, logged_in: bool) -> Navigation {
    if to_path != LOGIN_PATH && !logged_in {
        log::debug!("guard: anonymous navigation to {to_path}, redirecting to {LOGIN_PATH}");
        Navigation::Redirect(LOGIN_PATH)
    } else {
        Navigation::Proceed
    }
}
