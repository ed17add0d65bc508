//! `.msg` upload modal: drag-drop or picker, then a plain form submit.
//!
//! ERROR HANDLING
//! ==============
//! Wrong extensions are rejected before anything is submitted and reported
//! as a validation toast. Server-side parse errors come back on the page the
//! form navigates to.

use leptos::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::error::report;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::ui::{Modal, UiState};
use crate::state::upload::{PROCESSING_MESSAGE, UploadState};
use crate::util::notify;

/// Validate `file_name`, submit the form, and animate progress until the
/// browser navigates away.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn start_upload(
    file_name: &str,
    upload: RwSignal<UploadState>,
    notify_state: RwSignal<NotifyState>,
    form_ref: NodeRef<leptos::html::Form>,
) -> bool {
    if let Some(Err(err)) = upload.try_update(|u| u.begin(file_name)) {
        report(notify_state, &err);
        return false;
    }
    notify::persistent(notify_state, ToastKind::Info, PROCESSING_MESSAGE);

    #[cfg(feature = "hydrate")]
    {
        if let Some(form) = form_ref.get_untracked() {
            let _ = form.submit();
        }
        leptos::task::spawn_local(async move {
            while upload.try_with_untracked(|u| u.uploading).unwrap_or(false) {
                gloo_timers::future::TimeoutFuture::new(crate::config::UPLOAD_TICK_MS).await;
                let _ = upload.try_update(UploadState::tick);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form_ref;
    }
    true
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let form_ref = NodeRef::<leptos::html::Form>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !start_upload(&file.name(), upload, notify_state, form_ref) {
                input.set_value("");
            }
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.drag_over = false);
        #[cfg(feature = "hydrate")]
        {
            let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            if let Some(input) = input_ref.get_untracked() {
                input.set_files(Some(&files));
            }
            start_upload(&file.name(), upload, notify_state, form_ref);
        }
    };

    let on_cancel = move |_| {
        upload.update(UploadState::reset);
        ui.update(UiState::close_modal);
    };

    view! {
        <ModalShell modal=Modal::Upload title="Upload Change Email" class="modal--upload">
            <form
                id="uploadForm"
                action="/"
                method="post"
                enctype="multipart/form-data"
                node_ref=form_ref
            >
                <div
                    id="uploadZone"
                    class="upload-zone"
                    class:drag-over=move || upload.with(|u| u.drag_over)
                    on:click=move |_| {
                        if let Some(input) = input_ref.get_untracked() {
                            input.click();
                        }
                    }
                    on:dragover=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        upload.update(|u| u.drag_over = true);
                    }
                    on:dragleave=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        upload.update(|u| u.drag_over = false);
                    }
                    on:drop=on_drop
                >
                    <i class="fas fa-cloud-upload-alt"></i>
                    <p>"Drag & drop a .msg file here, or click to browse"</p>
                </div>
                <input
                    id="fileInput"
                    type="file"
                    name="file"
                    accept=".msg"
                    hidden=true
                    node_ref=input_ref
                    on:change=on_change
                />
                <input type="hidden" name="use_ai" prop:value=move || upload.with(|u| u.use_ai.to_string()) />
                <label class="upload-ai-toggle">
                    <input
                        id="useAiProcessing"
                        type="checkbox"
                        prop:checked=move || upload.with(|u| u.use_ai)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            upload.update(|u| u.use_ai = checked);
                        }
                    />
                    " Use AI processing"
                </label>
            </form>
            {move || {
                upload
                    .with(|u| u.file_name.clone())
                    .map(|name| {
                        view! {
                            <div id="uploadPreview" class="upload-preview">
                                <i class="fas fa-envelope"></i>
                                <span class="file-name">{name}</span>
                                <div class="upload-progress">
                                    <div
                                        class="upload-progress-bar"
                                        style=move || format!("width: {:.0}%", upload.with(|u| u.progress))
                                    ></div>
                                </div>
                            </div>
                        }
                    })
            }}
            <div class="modal__actions">
                <button id="cancelUpload" class="btn" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </ModalShell>
    }
}
