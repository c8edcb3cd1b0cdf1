//! Top navigation bar with page links, clock, and the signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::live_clock::LiveClock;
use crate::content::SITE_TITLE;
use crate::state::session::SessionContext;
use crate::util::clock::ClockVariant;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/characters", "Characters"),
    ("/stories", "Stories"),
    ("/about", "About"),
    ("/assistant", "Assistant"),
    ("/anonymous-chat", "Anonymous Chat"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let menu_open = RwSignal::new(false);

    let user_name = move || session.user().map(|u| u.name).unwrap_or_default();

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">{SITE_TITLE}</A>
            <button
                class="navbar__toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <ul class=move || if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li on:click=move |_| menu_open.set(false)>
                                <A href=*href>{*label}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="navbar__session">
                <LiveClock show_seconds=false variant=ClockVariant::Compact/>
                <Show when=move || session.user().is_some()>
                    <span class="navbar__user">{user_name}</span>
                    <button class="btn btn--ghost" on:click=move |_| session.sign_out()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
