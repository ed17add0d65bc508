//! AI provider status and usage statistics.

use leptos::prelude::*;

use crate::error::report_with;
use crate::state::ai::{AiState, status_rows};
use crate::state::notify::{NotifyState, ToastKind};
use crate::util::notify;

fn refresh(ai: RwSignal<AiState>) {
    ai.update(|a| {
        a.status_loading = true;
        a.status_error = None;
    });
    leptos::task::spawn_local(async move {
        let result = crate::net::api::ai_status().await;
        ai.update(|a| {
            a.status_loading = false;
            match result {
                Ok(status) => a.status = Some(status),
                Err(err) => a.status_error = Some(format!("Error loading AI status: {err}")),
            }
        });
    });
}

#[component]
pub fn AiStatusModal() -> impl IntoView {
    let ai = expect_context::<RwSignal<AiState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();

    // Fetch every time the modal opens.
    let is_open = Memo::new(move |_| ai.with(|a| a.status_open));
    Effect::new(move |_| {
        if is_open.get() {
            refresh(ai);
        }
    });

    let close = move || ai.update(|a| a.status_open = false);

    let clear_stats = move |_| {
        leptos::task::spawn_local(async move {
            match crate::net::api::clear_ai_stats().await {
                Ok(()) => {
                    notify::toast(notify_state, ToastKind::Success, "AI statistics cleared");
                    refresh(ai);
                }
                Err(err) => report_with(notify_state, "Error clearing AI statistics", &err),
            }
        });
    };

    let body = move || {
        ai.with(|a| {
            if a.status_loading {
                return view! { <p class="ai-status__loading">"Loading..."</p> }.into_any();
            }
            if let Some(err) = &a.status_error {
                let err = err.clone();
                return view! { <p class="ai-status__error">{err}</p> }.into_any();
            }
            let rows = a.status.as_ref().map(status_rows).unwrap_or_default();
            view! {
                <table class="ai-status__table">
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! {
                                <tr>
                                    <th>{label}</th>
                                    <td>{value}</td>
                                </tr>
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any()
        })
    };

    move || {
        is_open.get().then(|| {
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div
                        class="modal modal--ai-status"
                        tabindex="0"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                close();
                            }
                        }
                    >
                        <div class="modal__header">
                            <h2>"AI Status"</h2>
                            <button class="modal__close" title="Close" on:click=move |_| close()>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                        <div class="modal__body">{body}</div>
                        <div class="modal__actions">
                            <button class="btn" on:click=move |_| refresh(ai)>
                                <i class="fas fa-sync-alt"></i>
                                " Refresh"
                            </button>
                            <button class="btn btn--danger" on:click=clear_stats>
                                <i class="fas fa-trash"></i>
                                " Clear Stats"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
