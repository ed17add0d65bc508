//! Confirm dialog bound to the active `DialogKind::Confirm`.

use leptos::prelude::*;

use crate::state::dialog::{ActiveDialog, DialogKind, DialogState};
use crate::util::dialog;

/// Renders the active confirm dialog, if any. Escape and backdrop clicks
/// resolve `false`.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let dialogs = expect_context::<RwSignal<DialogState>>();

    move || {
        let Some(ActiveDialog { id, kind: DialogKind::Confirm(options) }) = dialogs.get().active else {
            return ().into_any();
        };
        let answer = move |value: bool| dialog::resolve(dialogs, id, value);
        let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                answer(false);
            }
        };
        let tone = options.tone.class_suffix();
        view! {
            <div class="dialog-backdrop" on:click=move |_| answer(false)>
                <div
                    class=format!("dialog dialog--confirm dialog--{tone}")
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                    autofocus=true
                >
                    <div class=format!("dialog__icon dialog__icon--{tone}")>
                        <i class=format!("fas {}", options.icon)></i>
                    </div>
                    <h2>{options.title}</h2>
                    <p class="dialog__message">{options.message}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| answer(false)>
                            {options.cancel_text}
                        </button>
                        <button class=format!("btn btn--{tone}") on:click=move |_| answer(true)>
                            {options.confirm_text}
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
