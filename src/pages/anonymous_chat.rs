//! Anonymous chat demo screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! All behavior lives in `AnonChatState`; this page only wires inputs to it.
//! Connecting waits the configured delay before an identity is generated.
//! While connected, a one-second sweep burns expired ephemeral messages.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::config::AppConfig;
use crate::state::anon_chat::{AnonChatState, AnonymousIdentity, Connection, MessageStatus};
use crate::util::clock;

#[component]
pub fn AnonymousChatPage() -> impl IntoView {
    let chat = RwSignal::new(AnonChatState::default());
    let connect_delay_ms = expect_context::<AppConfig>().chat_connect_delay_ms;

    let draft = RwSignal::new(String::new());
    let pseudonym_draft = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let now = clock::now_ms();
                let due = chat.try_with_untracked(|c| {
                    c.messages.iter().any(|m| !m.is_burned && m.expires_at_ms.is_some_and(|at| at <= now))
                });
                if due == Some(true) {
                    chat.try_update(|c| c.expire(now));
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_connect = move |_| {
        match chat.try_update(AnonChatState::begin_connect) {
            Some(Ok(())) => connect_after(chat, connect_delay_ms),
            Some(Err(e)) => chat.update(|c| c.error = Some(e.to_string())),
            None => {}
        }
    };

    let do_send = move || {
        let text = draft.get_untracked();
        let id = uuid::Uuid::new_v4().to_string();
        let sent = chat.try_update(|c| match c.send_message(&text, clock::now_ms(), id) {
            Ok(_) => {
                c.error = None;
                true
            }
            Err(e) => {
                c.error = Some(e.to_string());
                false
            }
        });
        if sent == Some(true) {
            draft.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let save_pseudonym = move |_| {
        let name = pseudonym_draft.get_untracked();
        chat.update(|c| {
            if let Err(e) = c.update_pseudonym(&name) {
                c.error = Some(e.to_string());
            }
        });
    };

    let open_settings = move |_| {
        let current = chat.with_untracked(|c| c.identity.as_ref().map(|i| i.pseudonym.clone()).unwrap_or_default());
        pseudonym_draft.set(current);
        chat.update(|c| c.show_settings = true);
    };

    view! {
        <PageLayout class="anon-chat">
            <header class="anon-chat__header">
                <h1>"Anonymous chat"</h1>
                <p class="anon-chat__notice">"Demo only. Messages never leave this tab."</p>
            </header>

            <Show when=move || chat.with(|c| c.error.is_some())>
                <p class="anon-chat__error">{move || chat.with(|c| c.error.clone().unwrap_or_default())}</p>
            </Show>

            {move || match chat.with(|c| c.connection) {
                Connection::Disconnected => view! {
                    <div class="anon-chat__welcome">
                        <p>"Start a chat to get a throwaway identity."</p>
                        <button class="btn btn--primary" on:click=on_connect>"Start anonymous chat"</button>
                    </div>
                }
                .into_any(),
                Connection::Connecting => view! {
                    <div class="anon-chat__welcome">
                        <div class="spinner" aria-hidden="true"></div>
                        <p>"Generating identity..."</p>
                    </div>
                }
                .into_any(),
                Connection::Connected => view! {
                    <div class="anon-chat__layout">
                        <aside class="anon-chat__sidebar">
                            <div class="anon-chat__identity">
                                <strong>{move || chat.with(|c| c.identity.as_ref().map(|i| i.pseudonym.clone()).unwrap_or_default())}</strong>
                                <span class="anon-chat__address">{move || chat.with(|c| c.identity.as_ref().map(|i| i.address.clone()).unwrap_or_default())}</span>
                                <span class="anon-chat__rep">{move || chat.with(|c| c.identity.as_ref().map_or(0, |i| i.reputation))}" rep"</span>
                            </div>
                            <div class="anon-chat__actions">
                                <button class="btn btn--ghost" on:click=open_settings>"Settings"</button>
                                <button class="btn btn--ghost" on:click=move |_| { chat.update(|c| { c.discover_users(); }); }>
                                    "Refresh"
                                </button>
                                <button class="btn btn--ghost" on:click=move |_| chat.update(AnonChatState::disconnect)>
                                    "Disconnect"
                                </button>
                            </div>
                            <h2>"Online"</h2>
                            <ul class="anon-chat__users">
                                {move || {
                                    chat.with(|c| {
                                        c.online_users
                                            .iter()
                                            .map(|u| {
                                                let address = u.address.clone();
                                                let selected = c.selected_user.as_deref() == Some(u.address.as_str());
                                                let class = if selected { "anon-chat__user anon-chat__user--selected" } else { "anon-chat__user" };
                                                view! {
                                                    <li class=class on:click=move |_| {
                                                        chat.update(|c| {
                                                            if let Err(e) = c.select_user(&address) {
                                                                c.error = Some(e.to_string());
                                                            }
                                                        });
                                                    }>
                                                        <span>{u.pseudonym.clone()}</span>
                                                        <span class="anon-chat__rep">{u.reputation}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                                }}
                            </ul>
                        </aside>

                        <section class="anon-chat__thread">
                            <Show
                                when=move || chat.with(|c| c.selected_user.is_some())
                                fallback=|| view! { <p class="anon-chat__empty">"Select someone to start talking."</p> }
                            >
                                <header class="anon-chat__thread-header">
                                    {move || chat.with(|c| c.selected_peer().map(|p| p.pseudonym.clone()).unwrap_or_default())}
                                </header>
                                <div class="anon-chat__messages">
                                    {move || {
                                        chat.with(|c| {
                                            c.conversation()
                                                .into_iter()
                                                .map(|m| {
                                                    let status = MessageStatus::of(m);
                                                    let own = c.is_own(m);
                                                    let id = m.id.clone();
                                                    let class = if own { "chat-msg chat-msg--own" } else { "chat-msg" };
                                                    let body = if status == MessageStatus::Burned { "Message burned".to_owned() } else { m.content.clone() };
                                                    let time = clock::format_time(&clock::TimeParts::from_ms(m.timestamp_ms), false);
                                                    view! {
                                                        <div class=class>
                                                            <span class="chat-msg__sender">{c.sender_name(m)}</span>
                                                            <p class="chat-msg__body">{body}</p>
                                                            <span class="chat-msg__meta">
                                                                {time}
                                                                {(status == MessageStatus::Ephemeral).then_some(" · ephemeral")}
                                                            </span>
                                                            <Show when=move || own && status != MessageStatus::Burned>
                                                                {
                                                                    let id = id.clone();
                                                                    view! {
                                                                        <button class="chat-msg__burn" on:click=move |_| { chat.update(|c| { c.burn_message(&id); }); }>
                                                                            "Burn"
                                                                        </button>
                                                                    }
                                                                }
                                                            </Show>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                    }}
                                </div>
                                <div class="anon-chat__composer">
                                    <label class="anon-chat__toggle">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || chat.with(|c| c.ephemeral)
                                            on:change=move |ev| chat.update(|c| c.ephemeral = event_target_checked(&ev))
                                        />
                                        "Ephemeral (60s)"
                                    </label>
                                    <input
                                        class="anon-chat__input"
                                        type="text"
                                        placeholder="Type a message..."
                                        prop:value=move || draft.get()
                                        on:input=move |ev| draft.set(event_target_value(&ev))
                                        on:keydown=on_keydown
                                    />
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || draft.get().trim().is_empty()
                                        on:click=move |_| do_send()
                                    >
                                        "Send"
                                    </button>
                                </div>
                            </Show>
                        </section>
                    </div>
                }
                .into_any(),
            }}

            <Show when=move || chat.with(|c| c.show_settings)>
                <div class="modal-backdrop">
                    <div class="modal" role="dialog" aria-label="Identity settings">
                        <h2>"Identity settings"</h2>
                        <input
                            class="anon-chat__input"
                            type="text"
                            prop:value=move || pseudonym_draft.get()
                            on:input=move |ev| pseudonym_draft.set(event_target_value(&ev))
                        />
                        <div class="modal__actions">
                            <button class="btn btn--ghost" on:click=move |_| chat.update(|c| c.show_settings = false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" on:click=save_pseudonym>"Save"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </PageLayout>
    }
}

/// Generate an identity once the simulated connect delay has passed.
fn connect_after(chat: RwSignal<AnonChatState>, delay_ms: u64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
        let identity = AnonymousIdentity::generate(uuid::Uuid::new_v4().as_u128());
        chat.try_update(|c| c.complete_connect(identity));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay_ms;
        let identity = AnonymousIdentity::generate(uuid::Uuid::new_v4().as_u128());
        chat.update(|c| c.complete_connect(identity));
    }
}
