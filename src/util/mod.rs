//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clocks, timers, DOM)
//! from page and component logic. Each has a no-op or fixed fallback when
//! compiled without `hydrate`, so state logic stays natively testable.

pub mod auth;
pub mod clock;
pub mod dialog;
pub mod export;
pub mod initial_data;
pub mod markdown;
pub mod notify;
pub mod poller;
pub mod storage;
pub mod sync;
pub mod theme;
pub mod timezone;
