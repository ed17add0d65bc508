//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{changes::ChangesPage, login::LoginPage};
use crate::state::change_tracker::ChangeTracker;
use crate::state::document::{ComparisonSource, DocumentState};
use crate::state::table::{TableState, comparison_rows_from_records};
use crate::state::{
    ai::AiState, auth::AuthState, dialog::DialogState, history::HistoryState, notify::NotifyState, sync::SyncState,
    timezone::TimezoneState, ui::UiState, updates::UpdateState, upload::UploadState, users::UsersState,
};
use crate::util::auth::Gate;
use crate::util::{clock, initial_data, theme};

/// Root application component.
///
/// Seeds the table and document from the page's embedded initial data,
/// provides every shared state signal, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let data = initial_data::load();
    let fallback_date = if data.date.trim().is_empty() { clock::today() } else { data.date.clone() };

    let table = RwSignal::new(TableState::from_records(&data.services, &fallback_date));
    let mut doc = DocumentState::from_data(&data);
    doc.set_comparison(comparison_rows_from_records(&data.services, &fallback_date), ComparisonSource::Table);
    let document = RwSignal::new(doc);
    let sync = RwSignal::new(SyncState::new(data.last_modified.unwrap_or(0.0)));

    let ui = RwSignal::new(UiState { theme: theme::read_preference(), ..UiState::default() });
    theme::apply(ui.get_untracked().theme);

    let dialogs = RwSignal::new(DialogState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(table);
    provide_context(document);
    provide_context(sync);
    provide_context(ui);
    provide_context(dialogs);
    provide_context(notify);
    provide_context(Gate::new(dialogs, notify));
    provide_context(RwSignal::new(ChangeTracker::default()));
    provide_context(RwSignal::new(TimezoneState::default()));
    provide_context(RwSignal::new(HistoryState::default()));
    provide_context(RwSignal::new(UpdateState::default()));
    provide_context(RwSignal::new(UploadState::default()));
    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(UsersState::default()));
    provide_context(RwSignal::new(AiState::default()));

    view! {
        <Title text="Change Management" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage />
                <Route path=StaticSegment("") view=ChangesPage />
            </Routes>
        </Router>
    }
}
