//! Change the logged-in account's password.

use leptos::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::error::report;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::ui::{Modal, UiState};
use crate::state::users::validate_password_change;
use crate::util::notify;

#[component]
pub fn ChangePasswordModal() -> impl IntoView {
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let clear = move || {
        old_password.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
    };

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        let checked = validate_password_change(
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        let (old, new) = match checked {
            Ok(pair) => pair,
            Err(err) => {
                report(notify_state, &err);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::change_password(&old, &new).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    clear();
                    ui.update(UiState::close_modal);
                    notify::toast(notify_state, ToastKind::Success, "Password changed successfully");
                }
                Err(err) => report(notify_state, &err),
            }
        });
    };

    let field = move |id: &'static str, label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-field" for=id>
                <span>{label}</span>
                <input
                    id=id
                    type="password"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
            </label>
        }
    };

    view! {
        <ModalShell modal=Modal::ChangePassword title="Change Password" class="modal--password">
            {field("currentPassword", "Current password", old_password)}
            {field("newPassword", "New password", new_password)}
            {field("confirmPassword", "Confirm new password", confirm_password)}
            <div class="modal__actions">
                <button class="btn" on:click=move |_| {
                    clear();
                    ui.update(UiState::close_modal);
                }>
                    "Cancel"
                </button>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit()>
                    {move || if busy.get() { "Saving..." } else { "Change Password" }}
                </button>
            </div>
        </ModalShell>
    }
}
