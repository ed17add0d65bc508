//! Awaitable dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DialogState` holds what is on screen; this module pairs each dialog id
//! with a oneshot responder so callers can `await` the user's answer.
//! Dialog components call `resolve` from their buttons, Escape, and backdrop.
//!
//! DESIGN
//! ======
//! Opening a dialog while another is active resolves the older one as
//! `false`, so no caller is left waiting on a dialog that vanished.

use leptos::prelude::*;

use crate::state::dialog::{ConfirmOptions, DialogKind, DialogState};

#[cfg(feature = "hydrate")]
thread_local! {
    static RESPONDERS: std::cell::RefCell<std::collections::HashMap<u64, futures::channel::oneshot::Sender<bool>>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Show `kind` and wait for the user's answer.
pub async fn request(dialogs: RwSignal<DialogState>, kind: DialogKind) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some((id, superseded)) = dialogs.try_update(|d| d.open(kind)) else {
            return false;
        };
        if let Some(old) = superseded {
            respond(old, false);
        }
        let (tx, rx) = futures::channel::oneshot::channel();
        RESPONDERS.with(|r| r.borrow_mut().insert(id, tx));
        rx.await.unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (dialogs, kind);
        false
    }
}

/// Ask a yes/no question. Resolves `false` on cancel, Escape, or backdrop.
pub async fn confirm(dialogs: RwSignal<DialogState>, options: ConfirmOptions) -> bool {
    request(dialogs, DialogKind::Confirm(options)).await
}

/// Close dialog `id` and hand `answer` to whoever awaits it.
pub fn resolve(dialogs: RwSignal<DialogState>, id: u64, answer: bool) {
    dialogs.update(|d| {
        d.close(id);
    });
    respond(id, answer);
}

fn respond(id: u64, answer: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(tx) = RESPONDERS.with(|r| r.borrow_mut().remove(&id)) {
            let _ = tx.send(answer);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, answer);
    }
}
