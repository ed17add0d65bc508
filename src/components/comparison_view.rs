//! Read-only comparison of the table or a loaded history snapshot.

use leptos::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::state::document::DocumentState;
use crate::state::ui::Modal;

#[component]
pub fn ComparisonView() -> impl IntoView {
    let document = expect_context::<RwSignal<DocumentState>>();

    view! {
        <ModalShell modal=Modal::Comparison title="Comparison" class="modal--comparison">
            <h3 class="comparison__heading">{move || document.with(DocumentState::comparison_heading)}</h3>
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>"Service"</th>
                        <th>"Date"</th>
                        <th>"Window"</th>
                        <th>"Comments"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = document.with(|d| d.comparison.clone());
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="4" class="comparison__empty">"Nothing to compare"</td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.service}</td>
                                        <td>{row.date}</td>
                                        <td>{row.window}</td>
                                        <td>{row.comments}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
        </ModalShell>
    }
}
