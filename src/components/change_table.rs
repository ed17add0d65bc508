//! Editable change table: filter bar, sortable headers, rows, empty state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows render from `TableState` keyed by row id, so typing into a cell
//! updates the input in place instead of rebuilding the row. Every mutating
//! action goes through the session gate first and forwards the table's
//! outcome to the change tracker.
//!
//! TRADE-OFFS
//! ==========
//! Deletes are optimistic: the row fades and leaves the table before
//! `/delete-row` answers. A failed delete only reports; the row is not
//! restored.

#[cfg(test)]
#[path = "change_table_test.rs"]
mod change_table_test;

use leptos::prelude::*;

use crate::config::{ROW_FADE_MS, SORT_HIGHLIGHT_MS};
use crate::error::{ClientError, report_with};
use crate::state::change_tracker::ChangeTracker;
use crate::state::dialog::{ConfirmOptions, DialogState};
use crate::state::notify::ToastKind;
use crate::state::session::{GateStatus, prompts};
use crate::state::table::{
    Column, DeleteEffect, Priority, PriorityFilter, RowId, SortDirection, SortKey, TableState, is_empty_row,
};
use crate::state::timezone::TimezoneState;
use crate::util::auth::{Gate, use_gate};
use crate::util::{clock, dialog, notify};

/// Sort indicator icon for a header.
fn sort_icon(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => "fas fa-sort",
        Some(SortDirection::Ascending) => "fas fa-sort-up",
        Some(SortDirection::Descending) => "fas fa-sort-down",
    }
}

/// Header text; time columns carry the active zone label.
fn column_heading(column: Column, zone_label: &str) -> String {
    if column.is_time() { format!("{} ({zone_label})", column.heading()) } else { column.heading().to_owned() }
}

fn filter_label(filter: PriorityFilter) -> &'static str {
    match filter {
        PriorityFilter::All => "All",
        PriorityFilter::Only(priority) => priority.label(),
    }
}

/// Append an empty editable row once the gate is open.
pub fn add_row(gate: Gate, table: RwSignal<TableState>) {
    gate.ensure(prompts::ADD_ROW, move || {
        table.update(|t| {
            t.add_row();
        });
        notify::toast(gate.notify, ToastKind::Success, "Row added successfully!");
    });
}

fn edit_row(gate: Gate, table: RwSignal<TableState>, timezone: RwSignal<TimezoneState>, id: RowId) {
    gate.ensure(prompts::EDIT_ROW, move || {
        if timezone.with_untracked(|tz| tz.enabled) {
            timezone.update(|tz| tz.enabled = false);
        }
        table.update(|t| {
            t.begin_edit(id);
        });
    });
}

fn save_row(gate: Gate, table: RwSignal<TableState>, tracker: RwSignal<ChangeTracker>, id: RowId) {
    gate.ensure(prompts::EDIT_ROW, move || {
        let Some(outcome) = table.try_update(|t| t.save_row(id)).flatten() else {
            return;
        };
        let message = if outcome.was_new { "Row creation successful!" } else { "Data updated successfully!" };
        if !outcome.changed {
            notify::toast(gate.notify, ToastKind::Success, message);
            return;
        }
        tracker.update(ChangeTracker::mark_unsaved);
        leptos::task::spawn_local(async move {
            match crate::net::api::save_row(&outcome.request).await {
                Ok(()) => notify::toast(gate.notify, ToastKind::Success, message),
                Err(err) => {
                    if matches!(err, ClientError::Auth(_)) {
                        gate.expire();
                    }
                    report_with(gate.notify, "Error saving changes", &err);
                }
            }
        });
    });
}

fn delete_row(
    gate: Gate,
    table: RwSignal<TableState>,
    tracker: RwSignal<ChangeTracker>,
    dialogs: RwSignal<DialogState>,
    id: RowId,
) {
    gate.ensure(prompts::EDIT_ROW, move || {
        leptos::task::spawn_local(async move {
            if !dialog::confirm(dialogs, ConfirmOptions::delete_row()).await {
                return;
            }
            table.update(|t| t.mark_removing(id));
            clock::sleep_ms(ROW_FADE_MS).await;
            let Some(outcome) = table.try_update(|t| t.delete_row(id)).flatten() else {
                return;
            };
            match outcome.effect {
                DeleteEffect::MarkUnsaved => tracker.update(ChangeTracker::mark_unsaved),
                DeleteEffect::Decrement => tracker.update(ChangeTracker::decrement),
                DeleteEffect::ResetCounter => tracker.update(ChangeTracker::reset_counter),
            }
            let removed = outcome.removed;
            if removed.is_new || is_empty_row(&removed) {
                notify::toast(gate.notify, ToastKind::Success, "Row deleted successfully!");
                return;
            }
            match crate::net::api::delete_row(&removed.cells.service).await {
                Ok(()) => notify::toast(gate.notify, ToastKind::Success, "Row deleted successfully!"),
                Err(err) => report_with(gate.notify, "Error deleting row", &err),
            }
        });
    });
}

fn change_priority(gate: Gate, table: RwSignal<TableState>, tracker: RwSignal<ChangeTracker>, id: RowId, priority: Priority) {
    gate.ensure(prompts::IMPACT, move || {
        if table.try_update(|t| t.set_priority(id, priority)).unwrap_or(false) {
            tracker.update(ChangeTracker::mark_unsaved);
        }
    });
}

fn sort_column(table: RwSignal<TableState>, key: SortKey) {
    let Some(seq) = table.try_update(|t| {
        t.toggle_sort(key);
        t.highlight_seq
    }) else {
        return;
    };
    leptos::task::spawn_local(async move {
        clock::sleep_ms(SORT_HIGHLIGHT_MS).await;
        let _ = table.try_update(|t| t.clear_highlight(seq));
    });
}

/// Overlay that blocks a restricted control until the gate opens.
#[component]
fn AuthOverlay(message: &'static str) -> impl IntoView {
    let gate = use_gate();
    let locked = move || gate.session.with(|s| s.status == GateStatus::Locked);

    move || {
        locked().then(|| {
            view! {
                <div
                    class="auth-required-overlay"
                    title="Authentication required"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gate.ensure(message, || {});
                    }
                ></div>
            }
        })
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();
    let filters = std::iter::once(PriorityFilter::All).chain(Priority::ALL.map(PriorityFilter::Only));

    view! {
        <div class="filter-controls">
            <span class="filter-controls__label">"Impact:"</span>
            {filters
                .map(|filter| {
                    let dot = match filter {
                        PriorityFilter::All => "filter-indicator filter-all",
                        PriorityFilter::Only(Priority::High) => "filter-indicator filter-high",
                        PriorityFilter::Only(Priority::Medium) => "filter-indicator filter-medium",
                        PriorityFilter::Only(Priority::Low) => "filter-indicator filter-low",
                    };
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || table.with(|t| t.filter == filter)
                            on:click=move |_| table.update(|t| t.set_filter(filter))
                        >
                            <span class=dot></span>
                            {filter_label(filter)}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SortHeader(key: SortKey) -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();
    let timezone = expect_context::<RwSignal<TimezoneState>>();

    let label = move || match key {
        SortKey::Priority => "Impact Priority".to_owned(),
        SortKey::Cell(column) => timezone.with(|tz| column_heading(column, tz.header_label())),
    };
    let icon = move || sort_icon(table.with(|t| t.ordering_for(key)));

    view! {
        <th class="sortable" on:click=move |_| sort_column(table, key)>
            {label}
            " "
            <i class=icon></i>
        </th>
    }
}

#[component]
fn ImpactSelector(id: RowId) -> impl IntoView {
    let gate = use_gate();
    let table = expect_context::<RwSignal<TableState>>();
    let tracker = expect_context::<RwSignal<ChangeTracker>>();

    let current = move || table.with(|t| t.row(id).map(|r| r.priority).unwrap_or_default());

    view! {
        <div class="impact-selector" data-value=move || current().as_str()>
            <select
                class=move || format!("impact-select impact-select--{}", current().as_str())
                prop:value=move || current().as_str()
                on:change=move |ev| {
                    let priority = Priority::parse(&event_target_value(&ev));
                    change_priority(gate, table, tracker, id, priority);
                }
            >
                {Priority::ALL
                    .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                    .into_iter()
                    .collect::<Vec<_>>()}
            </select>
            <AuthOverlay message=prompts::IMPACT />
        </div>
    }
}

#[component]
fn RowCell(id: RowId, column: Column, editing: Memo<bool>) -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();
    let timezone = expect_context::<RwSignal<TimezoneState>>();

    let source = move || table.with(|t| t.row(id).map(|r| r.cells.get(column).to_owned()).unwrap_or_default());
    let shown = move || {
        table.with(|t| {
            t.row(id)
                .map(|r| {
                    let raw = r.cells.get(column);
                    if column.is_time() { timezone.with(|tz| tz.display_time(raw, &r.cells.date)) } else { raw.to_owned() }
                })
                .unwrap_or_default()
        })
    };
    let converted = move || column.is_time() && timezone.with(|tz| tz.enabled);

    move || {
        if editing.get() {
            view! {
                <td class="editable">
                    <input
                        class="cell-input"
                        type="text"
                        placeholder=column.heading()
                        prop:value=source
                        on:input=move |ev| table.update(|t| t.set_cell(id, column, event_target_value(&ev)))
                    />
                </td>
            }
            .into_any()
        } else {
            view! { <td class:converted=converted>{shown}</td> }.into_any()
        }
    }
}

#[component]
fn TableRow(id: RowId) -> impl IntoView {
    let gate = use_gate();
    let table = expect_context::<RwSignal<TableState>>();
    let tracker = expect_context::<RwSignal<ChangeTracker>>();
    let timezone = expect_context::<RwSignal<TimezoneState>>();
    let dialogs = expect_context::<RwSignal<DialogState>>();

    let editing = Memo::new(move |_| table.with(|t| t.row(id).is_some_and(|r| r.is_editing())));
    let flag = move |f: fn(&crate::state::table::Row) -> bool| table.with(|t| t.row(id).is_some_and(f));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && editing.get_untracked() {
            ev.prevent_default();
            table.update(|t| {
                t.cancel_edit(id);
            });
        } else if ev.key() == "Enter" && editing.get_untracked() {
            ev.prevent_default();
            save_row(gate, table, tracker, id);
        }
    };

    view! {
        <tr
            class="change-row"
            class:row-highlight=move || flag(|r| r.highlighted)
            class:row-removing=move || flag(|r| r.removing)
            class:row-new=move || flag(|r| r.is_new)
            class:row-editing=move || editing.get()
            on:keydown=on_keydown
        >
            {Column::ALL.map(|column| view! { <RowCell id=id column=column editing=editing /> }).into_iter().collect::<Vec<_>>()}
            <td class="impact-cell">
                <ImpactSelector id=id />
            </td>
            <td class="action-cell">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <button class="table-btn edit-btn" title="Edit" on:click=move |_| edit_row(gate, table, timezone, id)>
                                <i class="fas fa-edit"></i>
                            </button>
                        }
                    }
                >
                    <button class="table-btn save-btn" title="Save" on:click=move |_| save_row(gate, table, tracker, id)>
                        <i class="fas fa-save"></i>
                    </button>
                </Show>
                <button class="table-btn delete-btn" title="Delete" on:click=move |_| delete_row(gate, table, tracker, dialogs, id)>
                    <i class="fas fa-trash"></i>
                </button>
                <AuthOverlay message=prompts::EDIT_ROW />
            </td>
        </tr>
    }
}

/// The change table with its filter bar and empty state.
#[component]
pub fn ChangeTable() -> impl IntoView {
    let gate = use_gate();
    let table = expect_context::<RwSignal<TableState>>();

    let row_ids = move || table.with(|t| t.visible_rows().iter().map(|r| r.id).collect::<Vec<_>>());
    let is_empty = move || table.with(TableState::is_empty);

    view! {
        <div class="table-section">
            <FilterBar />
            <div class="table-wrapper">
                <table id="changeTable">
                    <thead>
                        <tr>
                            {Column::ALL.map(|c| view! { <SortHeader key=SortKey::Cell(c) /> }).into_iter().collect::<Vec<_>>()}
                            <SortHeader key=SortKey::Priority />
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=row_ids key=|id| *id let:id>
                            <TableRow id=id />
                        </For>
                        <Show when=is_empty>
                            <tr class="empty-state">
                                <td colspan="8">
                                    <div class="empty-state-icon">
                                        <i class="fas fa-inbox"></i>
                                    </div>
                                    <div class="empty-state-text">"No changes found"</div>
                                    <button class="btn btn--primary" on:click=move |_| add_row(gate, table)>
                                        <i class="fas fa-plus"></i>
                                        " Add Row"
                                    </button>
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
