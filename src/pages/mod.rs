//! Routed pages.

pub mod changes;
pub mod login;
