//! Backdrop, header, and close handling shared by the panel modals.

use leptos::prelude::*;

use crate::state::ui::{Modal, UiState};

/// Renders `children` while `modal` is the open panel. Backdrop clicks,
/// Escape, and the close button all close it.
#[component]
pub fn ModalShell(modal: Modal, title: &'static str, #[prop(optional)] class: &'static str, children: ChildrenFn) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(UiState::close_modal);
    let children = StoredValue::new(children);

    move || {
        ui.with(|u| u.is_open(modal)).then(|| {
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div
                        class=format!("modal {class}")
                        tabindex="0"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                close();
                            }
                        }
                    >
                        <div class="modal__header">
                            <h2>{title}</h2>
                            <button class="modal__close" title="Close" on:click=move |_| close()>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                        <div class="modal__body">{children.with_value(|c| c())}</div>
                    </div>
                </div>
            }
        })
    }
}
