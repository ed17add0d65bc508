//! Admin user management: accounts, roles, sessions, access flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable from the profile menu for admin accounts; the server
//! rejects every call here with 403 for anyone else. The expanded state of
//! the add-user section survives reloads through `localStorage`.

use leptos::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::config::STORAGE_USER_ACTIONS_VISIBLE;
use crate::error::{report, report_with};
use crate::net::types::UserSummary;
use crate::state::auth::Role;
use crate::state::dialog::{ConfirmOptions, DialogState};
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::ui::{Modal, UiState};
use crate::state::users::{UsersState, validate_credentials};
use crate::util::{dialog, notify, storage};

const SIGNUP_FLAG: (&str, &str) = ("/signup-enabled", "/toggle-signup");
const GUEST_FLAG: (&str, &str) = ("/guest-enabled", "/toggle-guest");

fn load_users(users: RwSignal<UsersState>) {
    users.update(|u| u.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::list_users().await {
            Ok(list) => users.update(|u| u.set_users(list)),
            Err(err) => users.update(|u| {
                u.loading = false;
                u.error = Some(format!("Error loading users: {err}"));
            }),
        }
    });
}

fn load_flags(users: RwSignal<UsersState>) {
    leptos::task::spawn_local(async move {
        if let Ok(enabled) = crate::net::api::fetch_flag(SIGNUP_FLAG.0).await {
            users.update(|u| u.signup_enabled = enabled);
        }
        if let Ok(enabled) = crate::net::api::fetch_flag(GUEST_FLAG.0).await {
            users.update(|u| u.guest_enabled = enabled);
        }
    });
}

#[derive(Clone, Copy)]
struct UserActions {
    users: RwSignal<UsersState>,
    notify: RwSignal<NotifyState>,
    dialogs: RwSignal<DialogState>,
}

impl UserActions {
    fn add(self) {
        let credentials = match self.users.with_untracked(UsersState::new_user_credentials) {
            Ok(c) => c,
            Err(err) => {
                report(self.notify, &err);
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::add_user(&credentials).await {
                Ok(()) => {
                    self.users.update(UsersState::clear_form);
                    notify::toast(self.notify, ToastKind::Success, "User added successfully");
                    load_users(self.users);
                }
                Err(err) => report_with(self.notify, "Error adding user", &err),
            }
        });
    }

    fn reset_password(self, username: String, password: String) {
        let credentials = match validate_credentials(&username, &password) {
            Ok(c) => c,
            Err(err) => {
                report(self.notify, &err);
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user_password(&credentials).await {
                Ok(()) => notify::toast(self.notify, ToastKind::Success, "Password updated successfully"),
                Err(err) => report_with(self.notify, "Error updating password", &err),
            }
        });
    }

    fn delete(self, username: String) {
        leptos::task::spawn_local(async move {
            if !dialog::confirm(self.dialogs, ConfirmOptions::delete_user(&username)).await {
                return;
            }
            match crate::net::api::delete_user(&username).await {
                Ok(()) => {
                    self.users.update(|u| u.remove(&username));
                    notify::toast(self.notify, ToastKind::Success, "User deleted successfully");
                }
                Err(err) => report_with(self.notify, "Error deleting user", &err),
            }
        });
    }

    fn change_role(self, username: String, role: Role) {
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user_role(&username, role.as_str()).await {
                Ok(()) => {
                    self.users.update(|u| u.set_role(&username, role.as_str()));
                    notify::toast(self.notify, ToastKind::Success, "Role updated successfully");
                }
                Err(err) => report_with(self.notify, "Error updating role", &err),
            }
        });
    }

    fn force_logout(self, username: String) {
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_logout_user(&username).await {
                Ok(()) => {
                    notify::toast(self.notify, ToastKind::Success, &format!("{username} has been logged out"));
                }
                Err(err) => report_with(self.notify, "Error logging out user", &err),
            }
        });
    }

    fn toggle_flag(self, path: &'static str, apply: fn(&mut UsersState, bool)) {
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_flag(path).await {
                Ok(enabled) => self.users.update(|u| apply(u, enabled)),
                Err(err) => report_with(self.notify, "Error updating setting", &err),
            }
        });
    }
}

#[component]
fn UserRow(user: UserSummary, actions: UserActions) -> impl IntoView {
    let username = StoredValue::new(user.username.clone());
    let role = Role::parse(&user.role);
    let new_password = RwSignal::new(String::new());
    let resetting = RwSignal::new(false);

    view! {
        <tr class="user-row">
            <td class="user-row__name">{user.username.clone()}</td>
            <td>
                <select
                    class="user-row__role"
                    on:change=move |ev| {
                        actions.change_role(username.get_value(), Role::parse(&event_target_value(&ev)));
                    }
                >
                    {[Role::User, Role::Admin]
                        .into_iter()
                        .map(|r| view! {
                            <option value=r.as_str() selected={r == role}>
                                {r.as_str()}
                            </option>
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td>{user.created_by.clone()}</td>
            <td>{user.last_login.clone()}</td>
            <td class="user-row__actions">
                <Show
                    when=move || resetting.get()
                    fallback=move || view! {
                        <button class="btn btn--small" title="Reset password" on:click=move |_| resetting.set(true)>
                            <i class="fas fa-key"></i>
                        </button>
                    }
                >
                    <input
                        type="password"
                        class="user-row__password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--small btn--primary" title="Save password" on:click=move |_| {
                        actions.reset_password(username.get_value(), new_password.get_untracked());
                        new_password.set(String::new());
                        resetting.set(false);
                    }>
                        <i class="fas fa-check"></i>
                    </button>
                    <button class="btn btn--small" title="Cancel" on:click=move |_| {
                        new_password.set(String::new());
                        resetting.set(false);
                    }>
                        <i class="fas fa-times"></i>
                    </button>
                </Show>
                <button class="btn btn--small" title="Force logout" on:click=move |_| actions.force_logout(username.get_value())>
                    <i class="fas fa-sign-out-alt"></i>
                </button>
                <button class="btn btn--small btn--danger" title="Delete user" on:click=move |_| actions.delete(username.get_value())>
                    <i class="fas fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn AdminUsersPanel() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let actions = UserActions {
        users,
        notify: expect_context::<RwSignal<NotifyState>>(),
        dialogs: expect_context::<RwSignal<DialogState>>(),
    };

    let is_open = Memo::new(move |_| ui.with(|u| u.is_open(Modal::AdminUsers)));
    Effect::new(move |_| {
        if is_open.get() {
            let visible = storage::load_json::<bool>(STORAGE_USER_ACTIONS_VISIBLE).unwrap_or(false);
            users.update(|u| u.panel_visible = visible);
            load_users(users);
            load_flags(users);
        }
    });

    let toggle_actions = move |_| {
        let visible = users.try_update(|u| {
            u.panel_visible = !u.panel_visible;
            u.panel_visible
        });
        if let Some(visible) = visible {
            storage::save_json(STORAGE_USER_ACTIONS_VISIBLE, &visible);
        }
    };

    let list = move || {
        users.with(|u| {
            if u.loading && u.users.is_empty() {
                return view! { <p class="users__loading">"Loading users..."</p> }.into_any();
            }
            if let Some(err) = &u.error {
                let err = err.clone();
                return view! { <p class="users__error">{err}</p> }.into_any();
            }
            u.users
                .iter()
                .cloned()
                .map(|user| view! { <UserRow user=user actions=actions /> })
                .collect::<Vec<_>>()
                .into_any()
        })
    };

    view! {
        <ModalShell modal=Modal::AdminUsers title="Manage Users" class="modal--users">
            <div class="users__flags">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || users.with(|u| u.signup_enabled)
                        on:change=move |_| actions.toggle_flag(SIGNUP_FLAG.1, |u, on| u.signup_enabled = on)
                    />
                    " Allow sign-up"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || users.with(|u| u.guest_enabled)
                        on:change=move |_| actions.toggle_flag(GUEST_FLAG.1, |u, on| u.guest_enabled = on)
                    />
                    " Allow guest access"
                </label>
            </div>
            <button id="toggleUserActions" class="btn users__toggle" on:click=toggle_actions>
                <i class=move || {
                    if users.with(|u| u.panel_visible) { "fas fa-chevron-up" } else { "fas fa-chevron-down" }
                }></i>
                " Add User"
            </button>
            <Show when=move || users.with(|u| u.panel_visible)>
                <div class="users__add">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || users.with(|u| u.new_username.clone())
                        on:input=move |ev| users.update(|u| u.new_username = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || users.with(|u| u.new_password.clone())
                        on:input=move |ev| users.update(|u| u.new_password = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=move |_| actions.add()>
                        <i class="fas fa-user-plus"></i>
                        " Add"
                    </button>
                </div>
            </Show>
            <table class="users__table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Role"</th>
                        <th>"Created by"</th>
                        <th>"Last login"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{list}</tbody>
            </table>
        </ModalShell>
    }
}
