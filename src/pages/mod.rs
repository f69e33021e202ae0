//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components::page_shell`.

pub mod dashboard;
pub mod login;
pub mod sections;
