//! Persistent "data has been updated" notice.

use leptos::prelude::*;

use crate::state::updates::{UPDATE_NOTICE, UPDATE_NOTICE_SUFFIX, UpdateState};

/// Reload the page with a cache-busting query parameter.
pub fn reload_with_cache_buster() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            let href = location.href().unwrap_or_default();
            let _ = location.set_href(&crate::state::updates::refresh_url(&href, crate::util::clock::now_ms()));
        }
    }
}

/// Shown once the poller saw a newer document. Stays until the user reloads.
#[component]
pub fn UpdateBanner() -> impl IntoView {
    let updates = expect_context::<RwSignal<UpdateState>>();

    move || {
        updates.with(|u| u.available).then(|| {
            view! {
                <div class="update-notification">
                    <i class="fas fa-sync-alt"></i>
                    " "
                    {UPDATE_NOTICE}
                    " "
                    <a href="#" class="update-notification__refresh" on:click=move |ev| {
                        ev.prevent_default();
                        reload_with_cache_buster();
                    }>
                        "Refresh"
                    </a>
                    " "
                    {UPDATE_NOTICE_SUFFIX}
                </div>
            }
        })
    }
}
