//! Home page: welcome banner, featured stories, and quick links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::live_clock::LiveClock;
use crate::components::page_layout::PageLayout;
use crate::content::{SITE_TITLE, about, stories};
use crate::state::session::SessionContext;
use crate::util::clock::ClockVariant;

#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let greeting = move || match session.user() {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Welcome, dreamer.".to_owned(),
    };

    view! {
        <PageLayout class="home">
            <section class="hero">
                <h1>{SITE_TITLE}</h1>
                <p class="hero__greeting">{greeting}</p>
                <p class="hero__tagline">{format!("A serialized universe by {}.", about::AUTHOR)}</p>
                <LiveClock show_date=true variant=ClockVariant::Detailed/>
            </section>

            <section class="featured">
                <h2>"Featured stories"</h2>
                <div class="card-grid">
                    {stories::STORIES
                        .iter()
                        .map(|s| {
                            view! {
                                <article class="card">
                                    <span class="card__badge">{s.arc}</span>
                                    <h3>{s.title}</h3>
                                    <p>{s.summary}</p>
                                    <A href=format!("/read/{}", s.id) attr:class="btn btn--primary">"Read"</A>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="quick-links">
                <A href="/characters" attr:class="btn btn--ghost">"Meet the characters"</A>
                <A href="/assistant" attr:class="btn btn--ghost">"Ask Mr. Effort"</A>
                <A href="/anonymous-chat" attr:class="btn btn--ghost">"Anonymous chat"</A>
            </section>
        </PageLayout>
    }
}
