//! History snapshot browser: list, search, load, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the sync menu. The full mode sits behind the session gate and
//! can delete snapshots; view-only mode skips the gate and hides delete.
//! Loading a snapshot rebuilds the table, header title, source body, and the
//! comparison view from the stored document.

use leptos::prelude::*;

use crate::config::DEFAULT_TITLE;
use crate::error::report_with;
use crate::net::types::HistoryItem;
use crate::state::change_tracker::ChangeTracker;
use crate::state::dialog::{ConfirmOptions, DialogState};
use crate::state::document::{ComparisonSource, DocumentState};
use crate::state::history::{HistoryListView, HistoryState, item_title, service_count_label};
use crate::state::notify::ToastKind;
use crate::state::session::prompts;
use crate::state::table::{TableState, comparison_rows_from_records};
use crate::util::auth::{Gate, use_gate};
use crate::util::timezone::format_utc_in_zone;
use crate::util::{clock, dialog, notify};

/// Open the modal and fetch the first page.
pub fn open_history(gate: Gate, history: RwSignal<HistoryState>, view_only: bool) {
    let open = move || {
        history.update(|h| h.open(view_only));
        fetch_page(history, 1);
    };
    if view_only {
        open();
    } else {
        gate.ensure(prompts::SYNC, open);
    }
}

fn fetch_page(history: RwSignal<HistoryState>, page: u32) {
    history.update(|h| {
        h.page = page;
        h.loading = true;
    });
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_history(page).await {
            Ok((items, pagination)) => history.update(|h| h.set_items(items, pagination)),
            Err(err) => {
                leptos::logging::warn!("[{}] history fetch failed: {err}", err.error_code());
                history.update(|h| h.set_error(format!("Error loading history: {err}")));
            }
        }
    });
}

#[derive(Clone, Copy)]
struct HistoryActions {
    gate: Gate,
    history: RwSignal<HistoryState>,
    table: RwSignal<TableState>,
    document: RwSignal<DocumentState>,
    tracker: RwSignal<ChangeTracker>,
    dialogs: RwSignal<DialogState>,
}

impl HistoryActions {
    fn load(self, timestamp: f64, title: String) {
        let view_only = self.history.with_untracked(|h| h.view_only);
        leptos::task::spawn_local(async move {
            if !dialog::confirm(self.dialogs, ConfirmOptions::load_history(view_only)).await {
                return;
            }
            self.history.update(HistoryState::close);
            match crate::net::api::load_history(timestamp).await {
                Ok(data) => {
                    let fallback = if data.date.trim().is_empty() { clock::today() } else { data.date.clone() };
                    self.table.update(|t| t.replace_records(&data.services, &fallback));
                    self.document.update(|d| {
                        d.apply_data(&data);
                        d.set_comparison(
                            comparison_rows_from_records(&data.services, &fallback),
                            ComparisonSource::History { title },
                        );
                    });
                    if !view_only {
                        self.tracker.update(ChangeTracker::mark_unsaved);
                    }
                    notify::toast(self.gate.notify, ToastKind::Success, "History item loaded successfully!");
                }
                Err(err) => report_with(self.gate.notify, "Error loading data", &err),
            }
        });
    }

    fn delete(self, timestamp: f64) {
        leptos::task::spawn_local(async move {
            if !dialog::confirm(self.dialogs, ConfirmOptions::delete_history()).await {
                return;
            }
            match crate::net::api::delete_history(timestamp).await {
                Ok(()) => {
                    self.history.update(|h| {
                        h.remove(timestamp);
                    });
                    notify::toast(self.gate.notify, ToastKind::Success, "History item deleted");
                }
                Err(err) => report_with(self.gate.notify, "Error deleting history item", &err),
            }
        });
    }
}

#[component]
fn HistoryEntry(item: HistoryItem, actions: HistoryActions) -> impl IntoView {
    let timestamp = item.timestamp;
    let title = item_title(&item).to_owned();
    let date = format_utc_in_zone(&item.date, &clock::local_zone_name());
    let summary = format!("{} included", service_count_label(&item));
    let view_only = move || actions.history.with(|h| h.view_only);
    let load_title = title.clone();

    view! {
        <div class="history-item">
            <div class="history-item-header">
                <div class="history-item-title">
                    <span class="history-item-badge"></span>
                    {title}
                </div>
                <div class="history-item-date">{date}</div>
            </div>
            <div class="history-item-summary">{summary}</div>
            <div class="history-item-actions">
                <button class="history-item-btn load" on:click=move |_| actions.load(timestamp, load_title.clone())>
                    <i class="fas fa-cloud-download-alt"></i>
                    " Load"
                </button>
                <Show when=move || !view_only()>
                    <button class="history-item-btn delete" on:click=move |_| actions.delete(timestamp)>
                        <i class="fas fa-trash"></i>
                        " Delete"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn HistoryModal() -> impl IntoView {
    let actions = HistoryActions {
        gate: use_gate(),
        history: expect_context::<RwSignal<HistoryState>>(),
        table: expect_context::<RwSignal<TableState>>(),
        document: expect_context::<RwSignal<DocumentState>>(),
        tracker: expect_context::<RwSignal<ChangeTracker>>(),
        dialogs: expect_context::<RwSignal<DialogState>>(),
    };
    let history = actions.history;
    let close = move || history.update(HistoryState::close);

    let list = move || match history.with(HistoryState::view) {
        HistoryListView::Loading => view! {
            <div class="history-loading">
                <i class="fas fa-spinner fa-spin"></i>
                " Loading history..."
            </div>
        }
        .into_any(),
        HistoryListView::Error(message) => view! {
            <div class="history-error">
                <i class="fas fa-exclamation-circle"></i>
                <p>{message}</p>
            </div>
        }
        .into_any(),
        HistoryListView::Empty => view! {
            <div class="empty-history">
                <i class="fas fa-inbox"></i>
                <p>"No synced history items found"</p>
            </div>
        }
        .into_any(),
        HistoryListView::NoResults(term) => view! {
            <div class="empty-history">
                <i class="fas fa-search"></i>
                <p>{format!("No results found for \"{term}\"")}</p>
            </div>
        }
        .into_any(),
        HistoryListView::Items(items) => items
            .into_iter()
            .map(|item| view! { <HistoryEntry item=item actions=actions /> })
            .collect::<Vec<_>>()
            .into_any(),
    };

    move || {
        history.with(|h| h.open).then(|| {
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div
                        class="modal modal--history"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                close();
                            }
                        }
                        tabindex="0"
                    >
                        <div class="modal__header">
                            <h2>
                                {move || if history.with(|h| h.view_only) { "View History" } else { "Sync History" }}
                            </h2>
                            <button class="modal__close" title="Close" on:click=move |_| close()>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                        <div class="history-search">
                            <i class="fas fa-search"></i>
                            <input
                                id="historySearch"
                                type="text"
                                placeholder=format!("Search by title or date, e.g. {DEFAULT_TITLE}")
                                prop:value=move || history.with(|h| h.search.clone())
                                on:input=move |ev| history.update(|h| h.search = event_target_value(&ev))
                            />
                            <button class="history-search__clear" title="Clear" on:click=move |_| history.update(|h| h.search.clear())>
                                <i class="fas fa-times-circle"></i>
                            </button>
                        </div>
                        <div id="historyList" class="history-list">{list}</div>
                        <div class="history-pagination">
                            <button
                                class="btn"
                                disabled=move || !history.with(HistoryState::has_prev_page)
                                on:click=move |_| fetch_page(history, history.with_untracked(|h| h.page.saturating_sub(1).max(1)))
                            >
                                <i class="fas fa-chevron-left"></i>
                            </button>
                            <span class="history-pagination__page">
                                {move || {
                                    history.with(|h| match &h.pagination {
                                        Some(p) => format!("Page {} of {}", p.current_page, p.total_pages.max(1)),
                                        None => format!("Page {}", h.page),
                                    })
                                }}
                            </span>
                            <button
                                class="btn"
                                disabled=move || !history.with(HistoryState::has_next_page)
                                on:click=move |_| fetch_page(history, history.with_untracked(|h| h.page + 1))
                            >
                                <i class="fas fa-chevron-right"></i>
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
