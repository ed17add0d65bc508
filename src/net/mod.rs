//! Networking modules for the change-management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! by every endpoint.

pub mod api;
pub mod types;
