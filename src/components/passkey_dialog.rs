//! Passkey prompt bound to the active `DialogKind::Passkey`.

use leptos::prelude::*;

use crate::state::dialog::DialogState;
use crate::util::auth::use_gate;

/// Passkey prompt. Submitting validates against the server; an invalid
/// passkey keeps the dialog open with the error shown inline.
#[component]
pub fn PasskeyDialog() -> impl IntoView {
    let dialogs = expect_context::<RwSignal<DialogState>>();
    let gate = use_gate();

    // Only a new prompt re-creates the markup; typing updates it in place.
    let active_id = Memo::new(move |_| dialogs.with(|d| d.passkey().map(|(id, _)| id)));
    let prompt = move || dialogs.with(|d| d.passkey().map(|(_, p)| p.clone()).unwrap_or_default());

    move || {
        let id = active_id.get()?;
        let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                gate.submit_passkey(id);
            }
            "Escape" => {
                ev.prevent_default();
                gate.cancel_passkey(id);
            }
            _ => {}
        };
        let busy = move || prompt().busy;
        Some(view! {
            <div class="dialog-backdrop" on:click=move |_| gate.cancel_passkey(id)>
                <div class="dialog dialog--passkey" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__icon dialog__icon--primary">
                        <i class="fas fa-lock"></i>
                    </div>
                    <h2>"Authentication Required"</h2>
                    <p class="dialog__message">{move || prompt().message}</p>
                    <input
                        class="dialog__input passkey-input"
                        type="password"
                        placeholder="Enter passkey"
                        autofocus=true
                        disabled=busy
                        prop:value=move || prompt().input
                        on:input=move |ev| dialogs.update(|d| d.set_passkey_input(id, event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                    {move || {
                        prompt()
                            .error
                            .map(|err| {
                                view! {
                                    <div class="passkey-error">
                                        <i class="fas fa-exclamation-circle"></i>
                                        " "
                                        {err}
                                    </div>
                                }
                            })
                    }}
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| gate.cancel_passkey(id)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" disabled=busy on:click=move |_| gate.submit_passkey(id)>
                            {move || if busy() { "Checking..." } else { "Submit" }}
                        </button>
                    </div>
                </div>
            </div>
        })
    }
}
