//! Passkey session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editing, deleting, syncing, and other destructive actions are wrapped in
//! `ensure_authenticated`. The session is a single expiry timestamp mirrored
//! in `localStorage.authUntil`; the browser glue in `util::auth` reads and
//! writes that key and drives the passkey prompt.
//!
//! DESIGN
//! ======
//! The gate is a two-state machine. `Locked -> Unlocked` only happens through
//! `grant`, which callers invoke after the server confirmed the passkey.
//! `Unlocked -> Locked` happens on expiry (`refresh`) or `lock`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::AUTH_TTL_MS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateStatus {
    #[default]
    Locked,
    Unlocked,
}

/// Client-side authorization window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub valid_until: Option<i64>,
    pub status: GateStatus,
}

impl SessionState {
    /// Rebuild the gate from the raw `authUntil` value at time `now_ms`.
    pub fn from_stored(raw: Option<&str>, now_ms: i64) -> Self {
        let valid_until = raw.and_then(|v| v.trim().parse::<i64>().ok());
        let mut state = Self { valid_until, status: GateStatus::Locked };
        state.refresh(now_ms);
        state
    }

    pub fn is_authenticated(&self, now_ms: i64) -> bool {
        self.valid_until.is_some_and(|until| now_ms < until)
    }

    /// Open the window for `AUTH_TTL_MS`. Returns the new expiry.
    pub fn grant(&mut self, now_ms: i64) -> i64 {
        let until = now_ms + AUTH_TTL_MS;
        self.valid_until = Some(until);
        self.status = GateStatus::Unlocked;
        until
    }

    pub fn lock(&mut self) {
        self.valid_until = None;
        self.status = GateStatus::Locked;
    }

    /// Re-evaluate the expiry. Returns `true` when this call re-locked the gate.
    pub fn refresh(&mut self, now_ms: i64) -> bool {
        let next = if self.is_authenticated(now_ms) { GateStatus::Unlocked } else { GateStatus::Locked };
        let relocked = self.status == GateStatus::Unlocked && next == GateStatus::Locked;
        self.status = next;
        relocked
    }

    /// Run `action` now if authenticated; otherwise hand it back so the caller
    /// can prompt for a passkey and run it later.
    ///
    /// # Errors
    ///
    /// Returns the untouched action when the session is not authenticated.
    pub fn ensure_authenticated<F: FnOnce()>(&self, now_ms: i64, action: F) -> Result<(), F> {
        if self.is_authenticated(now_ms) {
            action();
            Ok(())
        } else {
            Err(action)
        }
    }
}

/// Prompt messages used by the gated actions.
pub mod prompts {
    pub const DEFAULT: &str = "Please enter the passkey to perform this action";
    pub const IMPACT: &str = "Please enter the passkey to change impact priority";
    pub const EDIT_ROW: &str = "Please enter the passkey to edit or delete data";
    pub const ADD_ROW: &str = "Please enter the passkey to add a new row";
    pub const SYNC: &str = "Please enter the passkey to access sync functionality";
    pub const EDIT_TITLE: &str = "Please enter the passkey to edit title";
    pub const RESET: &str = "Please enter the passkey to reset all data";
    pub const COMPARE: &str = "Please enter the passkey to compare and edit";
    pub const UPLOAD: &str = "Please enter the passkey to upload a file";
}
