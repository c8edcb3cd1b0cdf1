//! Floating assistant chat available on every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Prompts go into `AssistantState`; the reply is composed locally and
//! delivered after the configured delay to imitate a network round trip.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::assistant::{ASSISTANT_NAME, AssistantState, Role, compose_reply};
use crate::util::markdown;

#[component]
pub fn AssistantWidget() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();
    let config = expect_context::<AppConfig>();
    let delay_ms = config.assistant_reply_delay_ms;
    let base = StoredValue::new(config.base_path);

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = assistant.get();
        let _ = (state.messages.len(), state.pending, state.open);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        match assistant.try_update(|a| a.submit(&text)) {
            Some(Ok(prompt)) => {
                input.set(String::new());
                error.set(None);
                schedule_reply(assistant, prompt, base.get_value(), delay_ms);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !assistant.with(|a| a.pending);

    view! {
        <div class="assistant-widget">
            <Show when=move || assistant.with(|a| a.open)>
                <section class="assistant-widget__panel" aria-label=ASSISTANT_NAME>
                    <header class="assistant-widget__header">
                        <span>{ASSISTANT_NAME}</span>
                        <button class="btn btn--ghost" on:click=move |_| assistant.update(AssistantState::clear)>
                            "Clear"
                        </button>
                    </header>
                    <div class="assistant-widget__messages" node_ref=messages_ref>
                        {move || {
                            assistant
                                .get()
                                .messages
                                .into_iter()
                                .map(|msg| {
                                    if msg.role == Role::Assistant {
                                        let rendered = markdown::render_html(&msg.content);
                                        view! {
                                            <div class="assistant-widget__message assistant-widget__message--assistant" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="assistant-widget__message assistant-widget__message--user">{msg.content}</div>
                                        }
                                            .into_any()
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || assistant.with(|a| a.pending)>
                            <div class="assistant-widget__typing">"Mr. Effort is typing..."</div>
                        </Show>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="assistant-widget__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="assistant-widget__input-row">
                        <input
                            class="assistant-widget__input"
                            type="text"
                            placeholder="Ask about stories, characters, lore..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="btn btn--primary" on:click=move |_| do_send() disabled=move || !can_send()>
                            "Send"
                        </button>
                    </div>
                </section>
            </Show>
            <button
                class="assistant-widget__fab"
                aria-label="Toggle assistant"
                on:click=move |_| assistant.update(AssistantState::toggle)
            >
                {move || if assistant.with(|a| a.open) { "×" } else { "💬" }}
            </button>
        </div>
    }
}

/// Deliver the canned reply after `delay_ms`.
fn schedule_reply(assistant: RwSignal<AssistantState>, prompt: String, base: String, delay_ms: u64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
        assistant.try_update(|a| a.deliver(compose_reply(&prompt, &base)));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay_ms;
        assistant.update(|a| a.deliver(compose_reply(&prompt, &base)));
    }
}
