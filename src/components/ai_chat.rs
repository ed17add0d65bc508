//! Floating AI assistant chat over the current change table.

use leptos::prelude::*;

use crate::net::types::{AiContext, AskAiRequest};
use crate::state::ai::{AiRole, AiState};
use crate::state::document::DocumentState;
use crate::state::table::TableState;
use crate::util::clock;
use crate::util::markdown::render_markdown_html;

fn page_title() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.document()).map(|d| d.title()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn role_class(role: AiRole) -> &'static str {
    match role {
        AiRole::User => "ai-message ai-message--user",
        AiRole::Assistant => "ai-message ai-message--assistant",
        AiRole::Error => "ai-message ai-message--error",
    }
}

/// Chat bubble and panel. Renders nothing while the server flag is off.
#[component]
pub fn AiChat() -> impl IntoView {
    let ai = expect_context::<RwSignal<AiState>>();
    let table = expect_context::<RwSignal<TableState>>();
    let document = expect_context::<RwSignal<DocumentState>>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let Some(question) = ai.try_update(|a| a.begin_question(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());

        let context = AiContext {
            page_title: page_title(),
            header_title: document.with_untracked(|d| d.header_title.clone()),
            date: clock::today(),
            services: table.with_untracked(TableState::records),
            original_email: document.with_untracked(|d| d.original_body.clone()),
        };
        let request = AskAiRequest { question, context };
        leptos::task::spawn_local(async move {
            match crate::net::api::ask_ai(&request).await {
                Ok(answer) => ai.update(|a| a.push_answer(answer)),
                Err(err) => {
                    leptos::logging::warn!("[{}] ask-ai failed: {err}", err.error_code());
                    ai.update(|a| a.push_error(format!("Sorry, something went wrong: {err}")));
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let messages = move || {
        ai.with(|a| {
            a.messages
                .iter()
                .map(|msg| {
                    let class = role_class(msg.role);
                    match msg.role {
                        AiRole::Assistant => {
                            let html = render_markdown_html(&msg.content);
                            view! { <div class=class inner_html=html></div> }.into_any()
                        }
                        _ => {
                            let content = msg.content.clone();
                            view! { <div class=class>{content}</div> }.into_any()
                        }
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    move || {
        ai.with(|a| a.enabled).then(|| {
            view! {
                <div class="ai-chat" class:ai-chat--open=move || ai.with(|a| a.open)>
                    <button
                        id="aiChatToggle"
                        class="ai-chat__toggle"
                        title="Ask AI"
                        on:click=move |_| ai.update(|a| a.open = !a.open)
                    >
                        <i class="fas fa-robot"></i>
                    </button>
                    <Show when=move || ai.with(|a| a.open)>
                        <div class="ai-chat__panel">
                            <div class="ai-chat__header">
                                <span>"AI Assistant"</span>
                                <button class="ai-chat__status" title="AI status" on:click=move |_| {
                                    ai.update(|a| a.status_open = true);
                                }>
                                    <i class="fas fa-info-circle"></i>
                                </button>
                                <button class="ai-chat__clear" title="Clear chat" on:click=move |_| ai.update(AiState::clear)>
                                    <i class="fas fa-broom"></i>
                                </button>
                                <button class="ai-chat__close" title="Close" on:click=move |_| {
                                    ai.update(|a| a.open = false);
                                }>
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                            <div id="aiChatMessages" class="ai-chat__messages">
                                {messages}
                                {move || {
                                    ai.with(|a| a.loading)
                                        .then(|| view! { <div class="ai-message ai-message--loading">"Thinking..."</div> })
                                }}
                            </div>
                            <div class="ai-chat__input-row">
                                <textarea
                                    id="aiChatInput"
                                    class="ai-chat__input"
                                    placeholder="Ask about these changes..."
                                    prop:value=move || input.get()
                                    on:input=move |ev| input.set(event_target_value(&ev))
                                    on:keydown=on_keydown
                                ></textarea>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || ai.with(|a| a.loading)
                                    on:click=move |_| do_send()
                                >
                                    <i class="fas fa-paper-plane"></i>
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            }
        })
    }
}
