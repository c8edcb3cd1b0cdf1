//! Shared page frame: navbar, content area, footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn PageLayout(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let main_class = if class.is_empty() { "page".to_owned() } else { format!("page {class}") };
    view! {
        <div class="page-frame">
            <Navbar/>
            <main class=main_class>{children()}</main>
            <Footer/>
        </div>
    }
}
