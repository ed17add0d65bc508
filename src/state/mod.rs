//! Client state models shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each concern owns one plain struct that `app::App` wraps in an
//! `RwSignal` and provides via context. The structs hold no browser handles,
//! so every state transition is testable natively.

pub mod ai;
pub mod auth;
pub mod change_tracker;
pub mod dialog;
pub mod document;
pub mod history;
pub mod notify;
pub mod session;
pub mod sync;
pub mod table;
pub mod timezone;
pub mod ui;
pub mod updates;
pub mod upload;
pub mod users;
