//! Viewer for the original source document body.

use leptos::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::state::document::DocumentState;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::ui::Modal;
use crate::util::export::{BODY_FILE_NAME, copy_to_clipboard, download};
use crate::util::notify;

#[component]
pub fn BodyViewer() -> impl IntoView {
    let document = expect_context::<RwSignal<DocumentState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();

    let body = move || document.with(|d| d.original_body.clone());
    let style = move || {
        document.with(|d| {
            format!("font-size: {}px; white-space: {};", d.body_font_size, if d.body_wrap { "pre-wrap" } else { "pre" })
        })
    };

    let on_copy = move |_| {
        copy_to_clipboard(&body());
        notify::toast(notify_state, ToastKind::Success, "Email content copied to clipboard!");
    };
    let on_download = move |_| download(BODY_FILE_NAME, "text/plain", &body());

    view! {
        <ModalShell modal=Modal::OriginalBody title="Original Email" class="modal--body">
            <div class="body-toolbar">
                <button class="btn" title="Copy" on:click=on_copy>
                    <i class="fas fa-copy"></i>
                </button>
                <button class="btn" title="Download as text" on:click=on_download>
                    <i class="fas fa-file-download"></i>
                </button>
                <button
                    class="btn"
                    class:active=move || document.with(|d| d.body_wrap)
                    title="Toggle word wrap"
                    on:click=move |_| document.update(|d| d.body_wrap = !d.body_wrap)
                >
                    <i class="fas fa-align-left"></i>
                </button>
                <button class="btn" title="Smaller text" on:click=move |_| document.update(DocumentState::decrease_font)>
                    <i class="fas fa-minus"></i>
                </button>
                <span class="body-toolbar__size">{move || format!("{}px", document.with(|d| d.body_font_size))}</span>
                <button class="btn" title="Larger text" on:click=move |_| document.update(DocumentState::increase_font)>
                    <i class="fas fa-plus"></i>
                </button>
            </div>
            <Show
                when=move || document.with(DocumentState::has_body)
                fallback=|| view! { <p class="body-empty">"No original email loaded."</p> }
            >
                <pre id="emailBody" class="email-body" style=style>{body}</pre>
            </Show>
        </ModalShell>
    }
}
