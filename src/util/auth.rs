//! Passkey gate glue: storage, prompt, validation, and expiry checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::session` decides whether the window is open. This module binds it
//! to `localStorage.authUntil`, the passkey dialog, and `/validate-passkey`,
//! so components only call `Gate::ensure(prompt, action)`.
//!
//! ERROR HANDLING
//! ==============
//! An invalid passkey keeps the prompt open with the server message. A
//! network failure closes the prompt, reports an error toast, and the
//! pending action is dropped.

use leptos::prelude::*;

use crate::config::STORAGE_AUTH_UNTIL;
use crate::error::{ClientError, INVALID_PASSKEY_MESSAGE, PASSKEY_NETWORK_MESSAGE};
use crate::state::dialog::{DialogKind, DialogState, PasskeyPrompt};
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::SessionState;
use crate::util::{clock, dialog, notify, storage};

/// Handle to the session gate, provided through context by `App`.
#[derive(Clone, Copy)]
pub struct Gate {
    pub session: RwSignal<SessionState>,
    pub dialogs: RwSignal<DialogState>,
    pub notify: RwSignal<NotifyState>,
}

impl Gate {
    pub fn new(dialogs: RwSignal<DialogState>, notify: RwSignal<NotifyState>) -> Self {
        let session = SessionState::from_stored(storage::get_raw(STORAGE_AUTH_UNTIL).as_deref(), clock::now_ms());
        Self { session: RwSignal::new(session), dialogs, notify }
    }

    /// Re-read `authUntil` so a grant from another tab is honoured.
    /// Returns whether the window is open now.
    pub fn sync_from_storage(&self) -> bool {
        let now = clock::now_ms();
        let stored = SessionState::from_stored(storage::get_raw(STORAGE_AUTH_UNTIL).as_deref(), now);
        let authenticated = stored.is_authenticated(now);
        if self.session.with_untracked(|s| s != &stored) {
            self.session.set(stored);
        }
        authenticated
    }

    /// Run `action` if authenticated; otherwise prompt with `message` and run
    /// it once a valid passkey was entered.
    pub fn ensure<F>(self, message: &str, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.sync_from_storage();
        let session = self.session.get_untracked();
        if let Err(action) = session.ensure_authenticated(clock::now_ms(), action) {
            let message = message.to_owned();
            leptos::task::spawn_local(async move {
                if self.prompt(message).await {
                    action();
                }
            });
        }
    }

    /// Show the passkey dialog. Resolves `true` once the server accepted it.
    pub async fn prompt(self, message: String) -> bool {
        dialog::request(self.dialogs, DialogKind::Passkey(PasskeyPrompt { message, ..PasskeyPrompt::default() })).await
    }

    /// Validate the passkey typed into dialog `id`.
    pub fn submit_passkey(self, id: u64) {
        let Some(passkey) = self
            .dialogs
            .with_untracked(|d| d.passkey().filter(|(active, p)| *active == id && !p.busy).map(|(_, p)| p.input.trim().to_owned()))
        else {
            return;
        };
        self.dialogs.update(|d| d.set_passkey_busy(id, true));
        leptos::task::spawn_local(async move {
            match crate::net::api::validate_passkey(&passkey).await {
                Ok(()) => {
                    self.grant();
                    dialog::resolve(self.dialogs, id, true);
                    notify::toast(self.notify, ToastKind::Success, "Authentication successful!");
                }
                Err(ClientError::Auth(message)) => {
                    let message = if message.trim().is_empty() { INVALID_PASSKEY_MESSAGE.to_owned() } else { message };
                    self.dialogs.update(|d| d.reject_passkey(id, message));
                }
                Err(err) => {
                    leptos::logging::warn!("[{}] passkey validation failed: {err}", err.error_code());
                    dialog::resolve(self.dialogs, id, false);
                    notify::toast(self.notify, ToastKind::Error, PASSKEY_NETWORK_MESSAGE);
                }
            }
        });
    }

    pub fn cancel_passkey(self, id: u64) {
        dialog::resolve(self.dialogs, id, false);
    }

    fn grant(self) {
        let now = clock::now_ms();
        let Some(until) = self.session.try_update(|s| s.grant(now)) else {
            return;
        };
        storage::set_raw(STORAGE_AUTH_UNTIL, &until.to_string());
    }

    /// The server rejected a gated call: close the window so the next action
    /// prompts again.
    pub fn expire(self) {
        self.session.update(SessionState::lock);
        storage::remove(STORAGE_AUTH_UNTIL);
    }

    /// Re-check the stored expiry every `AUTH_CHECK_INTERVAL_MS` until the
    /// owning component unmounts.
    pub fn install_expiry_check(self) {
        #[cfg(feature = "hydrate")]
        {
            use std::sync::Arc;
            use std::sync::atomic::{AtomicBool, Ordering};

            let alive = Arc::new(AtomicBool::new(true));
            let alive_for_cleanup = Arc::clone(&alive);
            on_cleanup(move || alive_for_cleanup.store(false, Ordering::Relaxed));
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(crate::config::AUTH_CHECK_INTERVAL_MS).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    self.sync_from_storage();
                }
            });
        }
    }
}

/// Fetch the gate from context.
///
/// # Panics
///
/// Panics when called outside `App`, which always provides it.
pub fn use_gate() -> Gate {
    expect_context::<Gate>()
}
