//! Avatar button with the account dropdown.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::{Modal, UiState};
use crate::util::auth::use_gate;

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let gate = use_gate();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        ui.update(|u| u.profile_menu_open = false);
        gate.expire();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.account = None);
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <div class="profile-menu">
            <button
                id="profileButton"
                class="profile-menu__avatar"
                title=move || auth.with(AuthState::display_name)
                on:click=move |_| ui.update(|u| u.profile_menu_open = !u.profile_menu_open)
            >
                {move || auth.with(AuthState::initial)}
            </button>
            <Show when=move || ui.with(|u| u.profile_menu_open)>
                <div class="profile-menu__dropdown">
                    <div class="profile-menu__name">{move || auth.with(AuthState::display_name)}</div>
                    <button class="profile-menu__item" on:click=move |_| ui.update(|u| u.open_modal(Modal::ChangePassword))>
                        <i class="fas fa-key"></i>
                        " Change Password"
                    </button>
                    <Show when=move || auth.with(AuthState::is_admin)>
                        <button class="profile-menu__item" on:click=move |_| ui.update(|u| u.open_modal(Modal::AdminUsers))>
                            <i class="fas fa-users-cog"></i>
                            " Manage Users"
                        </button>
                    </Show>
                    <button class="profile-menu__item profile-menu__item--logout" on:click=on_logout.clone()>
                        <i class="fas fa-sign-out-alt"></i>
                        " Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
