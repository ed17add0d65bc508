//! Sync status indicator: three stages plus a change badge.

use leptos::prelude::*;

use crate::state::change_tracker::ChangeTracker;

#[component]
pub fn ChangeIndicator() -> impl IntoView {
    let tracker = expect_context::<RwSignal<ChangeTracker>>();
    let view_model = Memo::new(move |_| tracker.with(ChangeTracker::indicator));

    view! {
        <div
            class=move || format!("change-indicator change-indicator--{}", view_model.get().status.class_suffix())
            title=move || view_model.get().title
        >
            {move || {
                view_model
                    .get()
                    .stages
                    .into_iter()
                    .map(|stage| {
                        view! {
                            <div class=format!("sync-stage sync-stage--{}", stage.state.class_suffix())>
                                <i class=format!("fas {}", stage.icon)></i>
                                <span class="sync-stage__label">{stage.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <span class="change-indicator__badge">{move || view_model.get().badge}</span>
        </div>
    }
}
