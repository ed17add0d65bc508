//! Page header: editable title, change indicator, and the action toolbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutating action here goes through the session gate first. Sync,
//! history, and reset reach the server; compare, export, and the body viewer
//! only read local state.

use leptos::prelude::*;

use crate::components::change_indicator::ChangeIndicator;
use crate::components::change_table::add_row;
use crate::components::history_modal::open_history;
use crate::components::profile_menu::ProfileMenu;
use crate::components::update_banner::reload_with_cache_buster;
use crate::error::{ClientError, report_with};
use crate::state::change_tracker::ChangeTracker;
use crate::state::dialog::{ConfirmOptions, DialogState};
use crate::state::document::{ComparisonSource, DocumentState};
use crate::state::history::HistoryState;
use crate::state::notify::ToastKind;
use crate::state::session::prompts;
use crate::state::sync::{SyncState, SyncTarget};
use crate::state::table::TableState;
use crate::state::timezone::TimezoneState;
use crate::state::ui::{Modal, UiState};
use crate::util::auth::use_gate;
use crate::util::export::{EXPORT_FILE_NAME, export_rows, render_export_html};
use crate::util::sync::sync_all_data;
use crate::util::{dialog, export, notify, theme};

#[component]
fn HeaderTitle() -> impl IntoView {
    let gate = use_gate();
    let document = expect_context::<RwSignal<DocumentState>>();
    let tracker = expect_context::<RwSignal<ChangeTracker>>();

    let editing = Memo::new(move |_| document.with(|d| d.title_draft.is_some()));

    let commit = move || {
        let Some(Some(title)) = document.try_update(DocumentState::commit_title) else {
            return;
        };
        tracker.update(ChangeTracker::mark_unsaved);
        leptos::task::spawn_local(async move {
            match crate::net::api::save_title(&title).await {
                Ok(()) => notify::toast(gate.notify, ToastKind::Success, "Title updated successfully!"),
                Err(err) => {
                    if matches!(err, ClientError::Auth(_)) {
                        gate.expire();
                    }
                    report_with(gate.notify, "Error saving title", &err);
                }
            }
        });
    };

    move || {
        if editing.get() {
            view! {
                <input
                    id="headerTitleInput"
                    class="header__title-input"
                    type="text"
                    autofocus=true
                    prop:value=move || document.with(|d| d.title_draft.clone().unwrap_or_default())
                    on:input=move |ev| document.update(|d| d.set_title_draft(event_target_value(&ev)))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => commit(),
                        "Escape" => document.update(DocumentState::cancel_title_edit),
                        _ => {}
                    }
                    on:blur=move |_| commit()
                />
            }
            .into_any()
        } else {
            view! {
                <h1
                    id="headerTitle"
                    class="header__title"
                    title="Click to edit"
                    on:click=move |_| {
                        gate.ensure(prompts::EDIT_TITLE, move || document.update(DocumentState::begin_title_edit));
                    }
                >
                    {move || document.with(|d| d.header_title.clone())}
                </h1>
            }
            .into_any()
        }
    }
}

#[component]
fn SyncMenu() -> impl IntoView {
    let gate = use_gate();
    let ui = expect_context::<RwSignal<UiState>>();
    let table = expect_context::<RwSignal<TableState>>();
    let document = expect_context::<RwSignal<DocumentState>>();
    let sync = expect_context::<RwSignal<SyncState>>();
    let history = expect_context::<RwSignal<HistoryState>>();

    let run = move |target: SyncTarget| {
        ui.update(|u| u.sync_menu_open = false);
        sync_all_data(gate, table, document, sync, target);
    };
    let show_history = move |view_only: bool| {
        ui.update(|u| u.sync_menu_open = false);
        open_history(gate, history, view_only);
    };

    view! {
        <div class="sync-menu">
            <button
                id="syncDropdownBtn"
                class="btn btn--primary"
                disabled=move || sync.with(|s| s.in_flight)
                on:click=move |_| ui.update(|u| u.sync_menu_open = !u.sync_menu_open)
            >
                <i class="fas fa-cloud-upload-alt"></i>
                {move || if sync.with(|s| s.in_flight) { " Syncing..." } else { " Sync" }}
                <i class="fas fa-caret-down"></i>
            </button>
            <Show when=move || ui.with(|u| u.sync_menu_open)>
                <div class="sync-menu__dropdown">
                    <button id="syncDataBtn" class="sync-menu__item" on:click=move |_| run(SyncTarget::Data)>
                        <i class="fas fa-sync"></i>
                        " Sync"
                    </button>
                    <button id="syncHistoryBtn" class="sync-menu__item" on:click=move |_| run(SyncTarget::History)>
                        <i class="fas fa-save"></i>
                        " Sync & Save to History"
                    </button>
                    <button id="viewHistoryBtn" class="sync-menu__item" on:click=move |_| show_history(true)>
                        <i class="fas fa-eye"></i>
                        " View History"
                    </button>
                    <button id="historyBtn" class="sync-menu__item" on:click=move |_| show_history(false)>
                        <i class="fas fa-history"></i>
                        " History"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn HeaderBar() -> impl IntoView {
    let gate = use_gate();
    let ui = expect_context::<RwSignal<UiState>>();
    let table = expect_context::<RwSignal<TableState>>();
    let document = expect_context::<RwSignal<DocumentState>>();
    let timezone = expect_context::<RwSignal<TimezoneState>>();
    let dialogs = expect_context::<RwSignal<DialogState>>();
    let sync = expect_context::<RwSignal<SyncState>>();

    let compare = move |_| {
        gate.ensure(prompts::COMPARE, move || {
            let rows = table.with_untracked(TableState::comparison_rows);
            document.update(|d| d.set_comparison(rows, ComparisonSource::Table));
            ui.update(|u| u.open_modal(Modal::Comparison));
        });
    };

    let upload = move |_| {
        gate.ensure(prompts::UPLOAD, move || ui.update(|u| u.open_modal(Modal::Upload)));
    };

    let export_table = move |_| {
        let html = table.with_untracked(|t| {
            timezone.with_untracked(|tz| render_export_html(&export_rows(t, tz), tz.header_label()))
        });
        export::download(EXPORT_FILE_NAME, "text/html", &html);
        notify::toast(gate.notify, ToastKind::Success, "Table exported");
    };

    let reset = move |_| {
        gate.ensure(prompts::RESET, move || {
            leptos::task::spawn_local(async move {
                if !dialog::confirm(dialogs, ConfirmOptions::reset_data()).await {
                    return;
                }
                match crate::net::api::reset_data().await {
                    Ok(timestamp) => {
                        if let Some(ts) = timestamp {
                            sync.update(|s| s.observe_timestamp(ts));
                        }
                        notify::toast(gate.notify, ToastKind::Success, "Data reset successfully!");
                        reload_with_cache_buster();
                    }
                    Err(err) => {
                        if matches!(err, ClientError::Auth(_)) {
                            gate.expire();
                        }
                        report_with(gate.notify, "Error resetting data", &err);
                    }
                }
            });
        });
    };

    view! {
        <header class="header">
            <div class="header__left">
                <HeaderTitle />
                <ChangeIndicator />
            </div>
            <div class="header__actions">
                <SyncMenu />
                <button id="addRowBtn" class="btn" title="Add row" on:click=move |_| add_row(gate, table)>
                    <i class="fas fa-plus"></i>
                </button>
                <button id="compareBtn" class="btn" title="Compare" on:click=compare>
                    <i class="fas fa-columns"></i>
                </button>
                <button id="uploadBtn" class="btn" title="Upload email" on:click=upload>
                    <i class="fas fa-file-upload"></i>
                </button>
                <button
                    id="viewBodyBtn"
                    class="btn"
                    title="Original email"
                    on:click=move |_| ui.update(|u| u.open_modal(Modal::OriginalBody))
                >
                    <i class="fas fa-envelope-open-text"></i>
                </button>
                <button id="exportBtn" class="btn" title="Export" on:click=export_table>
                    <i class="fas fa-file-export"></i>
                </button>
                <button
                    id="themeToggle"
                    class="btn"
                    title="Toggle theme"
                    on:click=move |_| {
                        let next = theme::toggle(ui.with_untracked(|u| u.theme));
                        ui.update(|u| u.theme = next);
                    }
                >
                    <i class=move || format!("fas {}", ui.with(|u| u.theme.toggle_icon()))></i>
                </button>
                <button id="resetBtn" class="btn btn--danger" title="Reset" on:click=reset>
                    <i class="fas fa-trash-restore"></i>
                </button>
                <ProfileMenu />
            </div>
        </header>
    }
}
