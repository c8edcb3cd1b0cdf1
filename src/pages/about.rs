//! About the author and the universe.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::content::about::{AUTHOR, AUTHOR_BIO, CONTACT, POWER_SYSTEM, THEMES, TIMELINE, WRITING_STYLE};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageLayout class="about">
            <h1>{format!("About {AUTHOR}")}</h1>
            <p>{AUTHOR_BIO}</p>

            <h2>"Writing style"</h2>
            <p>{WRITING_STYLE}</p>

            <h2>"Themes"</h2>
            <ul class="about__themes">{THEMES.iter().map(|t| view! { <li>{*t}</li> }).collect::<Vec<_>>()}</ul>

            <h2>"Power system"</h2>
            <p>{POWER_SYSTEM}</p>

            <h2>"Timeline"</h2>
            <ol class="timeline">
                {TIMELINE
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="timeline__entry">
                                <span class="timeline__era">{entry.era}</span>
                                <span class="timeline__event">{entry.event}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>

            <h2>"Contact"</h2>
            <p>{CONTACT}</p>
        </PageLayout>
    }
}
