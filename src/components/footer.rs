use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{SITE_TITLE, about};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{format!("{SITE_TITLE} · written by {}", about::AUTHOR)}</p>
            <p class="footer__links">
                <A href="/stories">"Stories"</A>
                " · "
                <A href="/characters">"Characters"</A>
                " · "
                <A href="/about">"About"</A>
            </p>
        </footer>
    }
}
