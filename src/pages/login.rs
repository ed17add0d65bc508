//! Login page with optional sign-up and guest access.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::error::ClientError;
use crate::net::api::SignupOutcome;
use crate::state::users::validate_credentials;

pub const EXISTING_ACCOUNT_MESSAGE: &str = "You already have an account. Please log in.";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Sign Up Successful! You can now log in.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Delay before a successful sign-up flips the form back to login.
const SIGNUP_SWITCH_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginMode {
    Login,
    Signup,
}

impl LoginMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Sign up",
            Self::Signup => "Already have an account? Log in",
        }
    }
}

/// Form feedback: `Ok` is a success line, `Err` an error line.
pub type Feedback = Result<String, String>;

/// User-facing text for a failed request.
pub fn error_message(err: &ClientError) -> String {
    match err {
        ClientError::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        ClientError::Auth(msg) | ClientError::Validation(msg) | ClientError::Server(msg) => msg.clone(),
    }
}

/// Feedback for a sign-up attempt, and whether to switch back to login.
pub fn signup_feedback(result: &Result<SignupOutcome, ClientError>) -> (Feedback, bool) {
    match result {
        Ok(SignupOutcome::Created) => (Ok(SIGNUP_SUCCESS_MESSAGE.to_owned()), true),
        Ok(SignupOutcome::ExistingAccount) => (Err(EXISTING_ACCOUNT_MESSAGE.to_owned()), true),
        Err(err) => (Err(error_message(err)), false),
    }
}

fn go_home() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = RwSignal::new(LoginMode::Login);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let feedback = RwSignal::new(None::<Feedback>);
    let busy = RwSignal::new(false);
    let signup_enabled = RwSignal::new(false);
    let guest_enabled = RwSignal::new(false);

    leptos::task::spawn_local(async move {
        if let Ok(enabled) = crate::net::api::fetch_flag("/signup-enabled").await {
            signup_enabled.set(enabled);
        }
        if let Ok(enabled) = crate::net::api::fetch_flag("/guest-enabled").await {
            guest_enabled.set(enabled);
        }
    });

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(c) => c,
            Err(err) => {
                feedback.set(Some(Err(error_message(&err))));
                return;
            }
        };
        busy.set(true);
        feedback.set(None);
        let current = mode.get_untracked();
        leptos::task::spawn_local(async move {
            match current {
                LoginMode::Login => match crate::net::api::login(&credentials).await {
                    Ok(_) => go_home(),
                    Err(err) => {
                        leptos::logging::warn!("[{}] login failed: {err}", err.error_code());
                        feedback.set(Some(Err(error_message(&err))));
                    }
                },
                LoginMode::Signup => {
                    let result = crate::net::api::signup(&credentials).await;
                    let (message, switch) = signup_feedback(&result);
                    feedback.set(Some(message));
                    if switch {
                        password.set(String::new());
                        crate::util::clock::sleep_ms(SIGNUP_SWITCH_MS).await;
                        mode.set(LoginMode::Login);
                    }
                }
            }
            busy.set(false);
        });
    };

    let on_guest = move |_| {
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::guest_login().await {
                Ok(()) => go_home(),
                Err(err) => feedback.set(Some(Err(error_message(&err)))),
            }
            busy.set(false);
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || mode.get().title()}</h1>
                <input
                    id="username"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <input
                    id="password"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                {move || {
                    feedback.get().map(|fb| match fb {
                        Ok(msg) => view! { <div class="login-card__success">{msg}</div> }.into_any(),
                        Err(msg) => view! { <div class="login-card__error">{msg}</div> }.into_any(),
                    })
                }}
                <button class="btn btn--primary login-card__submit" disabled=move || busy.get() on:click=move |_| submit()>
                    {move || if busy.get() { "Please wait..." } else { mode.get().title() }}
                </button>
                <Show when=move || signup_enabled.get()>
                    <a href="#" class="login-card__switch" on:click=move |ev| {
                        ev.prevent_default();
                        feedback.set(None);
                        mode.update(|m| {
                            *m = match *m {
                                LoginMode::Login => LoginMode::Signup,
                                LoginMode::Signup => LoginMode::Login,
                            };
                        });
                    }>
                        {move || mode.get().switch_prompt()}
                    </a>
                </Show>
                <Show when=move || guest_enabled.get()>
                    <button class="btn login-card__guest" disabled=move || busy.get() on:click=on_guest>
                        <i class="fas fa-user-secret"></i>
                        " Continue as Guest"
                    </button>
                </Show>
            </div>
        </div>
    }
}
