//! Story catalogue grouped by arc.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_layout::PageLayout;
use crate::content::stories::{ARCS, stories_in_arc};

#[component]
pub fn StoriesPage() -> impl IntoView {
    view! {
        <PageLayout class="stories">
            <h1>"Stories"</h1>
            {ARCS
                .iter()
                .map(|arc| {
                    view! {
                        <section class="arc">
                            <h2>{format!("The {arc} arc")}</h2>
                            <ol class="arc__list">
                                {stories_in_arc(arc)
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <li class="arc__story">
                                                <A href=format!("/read/{}", s.id)>{s.title}</A>
                                                <p>{s.summary}</p>
                                                <span class="arc__meta">{format!("{} chapters", s.chapters.len())}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ol>
                        </section>
                    }
                })
                .collect::<Vec<_>>()}
        </PageLayout>
    }
}
