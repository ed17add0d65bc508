//! Main change board page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-lifetime background work: the session expiry check, the
//! remote update poller, and the subscription that feeds sync lifecycle
//! events into the change tracker. Everything else is layout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_users_panel::AdminUsersPanel;
use crate::components::ai_chat::AiChat;
use crate::components::ai_status_modal::AiStatusModal;
use crate::components::body_viewer::BodyViewer;
use crate::components::change_password_modal::ChangePasswordModal;
use crate::components::change_table::ChangeTable;
use crate::components::comparison_view::ComparisonView;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::header_bar::HeaderBar;
use crate::components::history_modal::HistoryModal;
use crate::components::passkey_dialog::PasskeyDialog;
use crate::components::timezone_controls::TimezoneControls;
use crate::components::toasts::Toasts;
use crate::components::update_banner::UpdateBanner;
use crate::components::upload_panel::UploadPanel;
use crate::config::SYNCED_REVERT_MS;
use crate::state::ai::AiState;
use crate::state::auth::AuthState;
use crate::state::change_tracker::ChangeTracker;
use crate::state::sync::SyncState;
use crate::state::updates::UpdateState;
use crate::util::auth::use_gate;
use crate::util::clock;
use crate::util::poller::install_update_poller;

/// Feed every published sync event into the tracker. A success also clears
/// any update notice our own sync caused and schedules the synced revert.
fn subscribe_sync_events(sync: RwSignal<SyncState>, tracker: RwSignal<ChangeTracker>, updates: RwSignal<UpdateState>) {
    let seq = Memo::new(move |_| sync.with(|s| s.event_seq));
    Effect::new(move |_| {
        seq.track();
        let Some(event) = sync.with_untracked(|s| s.last_event.clone()) else {
            return;
        };
        let Some(generation) = tracker.try_update(|t| t.apply_sync_event(&event)).flatten() else {
            return;
        };
        updates.update(UpdateState::acknowledge);
        leptos::task::spawn_local(async move {
            clock::sleep_ms(SYNCED_REVERT_MS).await;
            let _ = tracker.try_update(|t| t.revert_synced(generation));
        });
    });
}

/// Warn before leaving while the tracker reports unsaved edits.
fn install_unload_guard(tracker: RwSignal<ChangeTracker>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::beforeunload, move |ev| {
            if tracker.try_with_untracked(ChangeTracker::has_unsaved_changes).unwrap_or(false) {
                ev.prevent_default();
                ev.set_return_value(crate::config::BEFORE_UNLOAD_MESSAGE);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tracker;
    }
}

#[component]
pub fn ChangesPage() -> impl IntoView {
    let gate = use_gate();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ai = expect_context::<RwSignal<AiState>>();
    let sync = expect_context::<RwSignal<SyncState>>();
    let tracker = expect_context::<RwSignal<ChangeTracker>>();
    let updates = expect_context::<RwSignal<UpdateState>>();
    let navigate = use_navigate();

    subscribe_sync_events(sync, tracker, updates);
    install_unload_guard(tracker);
    gate.install_expiry_check();
    install_update_poller(sync, updates);

    auth.update(|a| a.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Some(user) if !user.logged_in => navigate("/login", NavigateOptions::default()),
            Some(user) => auth.update(|a| a.apply_current_user(&user)),
            None => auth.update(|a| a.loading = false),
        }
        let enabled = crate::net::api::fetch_flag("/ai-chat-enabled").await.unwrap_or(false);
        ai.update(|a| a.enabled = enabled);
    });

    view! {
        <div class="changes-page">
            <UpdateBanner />
            <HeaderBar />
            <main class="changes-page__main">
                <TimezoneControls />
                <ChangeTable />
            </main>
            <HistoryModal />
            <BodyViewer />
            <ComparisonView />
            <UploadPanel />
            <ChangePasswordModal />
            <AdminUsersPanel />
            <AiChat />
            <AiStatusModal />
            <ConfirmDialog />
            <PasskeyDialog />
            <Toasts />
        </div>
    }
}
