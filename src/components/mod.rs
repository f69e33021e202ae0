//! Reusable UI components shared across pages.

pub mod hash_router;
pub mod page_shell;
