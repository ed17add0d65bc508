//! Toast stack.

use leptos::prelude::*;

use crate::state::notify::NotifyState;
use crate::util::notify;

/// Renders every queued toast; clicking one dismisses it.
#[component]
pub fn Toasts() -> impl IntoView {
    let state = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                state
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast toast--{}", toast.kind.class_suffix());
                        let icon = format!("fas {}", toast.kind.icon());
                        view! {
                            <div class=class on:click=move |_| notify::dismiss(state, id)>
                                <i class=icon></i>
                                <span class="toast__message">{toast.message}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
