//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the plain session model and its storage rules; `session`
//! wraps it in the reactive context handle that views and the router use.

pub mod auth;
pub mod session;
