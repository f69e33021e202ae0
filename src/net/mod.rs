//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the configured client and its request interceptor; `types`
//! defines the auth wire schema.

pub mod api;
pub mod types;
