use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page drifted out of the dream."</p>
            <A href="/" attr:class="btn btn--primary">"Go home"</A>
        </div>
    }
}
