//! Remote update poller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Checks `/check-updates` once on mount and then every
//! `UPDATE_POLL_INTERVAL_MS`, comparing against the timestamp of the document
//! this page shows. A detected update only raises the notice; the page never
//! reloads itself.
//!
//! ERROR HANDLING
//! ==============
//! Failed checks are logged and retried on the next tick. They never toast.

use leptos::prelude::*;

use crate::state::sync::SyncState;
use crate::state::updates::UpdateState;

/// Start polling until the owning component unmounts.
pub fn install_update_poller(sync: RwSignal<SyncState>, updates: RwSignal<UpdateState>) {
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                check_once(sync, updates).await;
                gloo_timers::future::sleep(std::time::Duration::from_millis(crate::config::UPDATE_POLL_INTERVAL_MS)).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (sync, updates);
    }
}

#[cfg(feature = "hydrate")]
async fn check_once(sync: RwSignal<SyncState>, updates: RwSignal<UpdateState>) {
    let Some(state) = sync.try_get_untracked() else {
        return;
    };
    // A sync from this page is about to move the baseline; skip this round.
    if state.in_flight {
        return;
    }
    match crate::net::api::check_updates(state.data_timestamp).await {
        Ok(response) => {
            let _ = updates.try_update(|u| u.apply(&response));
        }
        Err(err) => leptos::logging::warn!("update check failed: {err}"),
    }
}
