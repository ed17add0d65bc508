//! Toast helpers over the shared `NotifyState` signal.
//!
//! Non-persistent toasts auto-dismiss after `TOAST_DISMISS_MS`; persistent
//! ones stay until the caller dismisses them by id.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, ToastKind};

/// Show a toast that dismisses itself.
pub fn toast(notify: RwSignal<NotifyState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = notify.try_update(|n| n.push(kind, message, false)) else {
        return;
    };
    schedule_dismiss(notify, id);
}

/// Show a toast that stays until `dismiss` is called. Returns its id.
pub fn persistent(notify: RwSignal<NotifyState>, kind: ToastKind, message: impl Into<String>) -> u64 {
    notify.try_update(|n| n.push(kind, message, true)).unwrap_or_default()
}

pub fn dismiss(notify: RwSignal<NotifyState>, id: u64) {
    notify.update(|n| n.dismiss(id));
}

fn schedule_dismiss(notify: RwSignal<NotifyState>, id: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::config::TOAST_DISMISS_MS)).await;
            let _ = notify.try_update(|n| n.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notify, id);
    }
}
