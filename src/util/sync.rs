//! The one sync path: table to server, with lifecycle events.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sync_all_data` publishes `SyncEvent::Started`, then `Succeeded` or
//! `Failed`, on the shared `SyncState` signal. The change tracker and the
//! update notice subscribe to those events; nothing wraps this function.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as one error toast and a `Failed` event. There is no
//! retry. A 401 from the server locks the session gate so the next attempt
//! prompts for the passkey again.

use leptos::prelude::*;

use crate::error::{ClientError, report_with};
use crate::state::document::DocumentState;
use crate::state::notify::ToastKind;
use crate::state::session::prompts;
use crate::state::sync::{SyncEvent, SyncState, SyncTarget, build_sync_request};
use crate::state::table::TableState;
use crate::util::auth::Gate;
use crate::util::{clock, notify};

pub const NO_DATA_MESSAGE: &str = "No data to sync.";

/// Push every row to `target` once the session gate is open.
pub fn sync_all_data(
    gate: Gate,
    table: RwSignal<TableState>,
    document: RwSignal<DocumentState>,
    sync: RwSignal<SyncState>,
    target: SyncTarget,
) {
    if table.with_untracked(TableState::is_empty) {
        notify::toast(gate.notify, ToastKind::Info, NO_DATA_MESSAGE);
        return;
    }
    gate.ensure(prompts::SYNC, move || {
        if sync.with_untracked(|s| s.in_flight) {
            return;
        }
        let today = clock::today();
        let request = table.with_untracked(|t| document.with_untracked(|d| build_sync_request(t, d, &today)));
        let Some(request) = request else {
            notify::toast(gate.notify, ToastKind::Info, NO_DATA_MESSAGE);
            return;
        };
        sync.update(|s| s.publish(SyncEvent::Started));
        leptos::task::spawn_local(async move {
            match crate::net::api::sync(target, &request).await {
                Ok(timestamp) => {
                    sync.update(|s| s.publish(SyncEvent::Succeeded { timestamp }));
                    notify::toast(gate.notify, ToastKind::Success, target.success_message());
                }
                Err(err) => {
                    if matches!(err, ClientError::Auth(_)) {
                        gate.expire();
                    }
                    sync.update(|s| s.publish(SyncEvent::Failed { message: err.to_string() }));
                    report_with(gate.notify, "Error syncing data", &err);
                }
            }
        });
    });
}
