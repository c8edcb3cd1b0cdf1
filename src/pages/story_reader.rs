//! Reader for `/read/:id` with chapter navigation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::page_layout::PageLayout;
use crate::content::stories::{self, Story};
use crate::util::markdown;

#[component]
pub fn StoryReaderPage() -> impl IntoView {
    let params = use_params_map();
    let story = Memo::new(move |_| params.read().get("id").and_then(|id| stories::story_by_id(&id)).copied());

    view! {
        <PageLayout class="reader">
            {move || match story.get() {
                Some(s) => view! { <StoryView story=s/> }.into_any(),
                None => view! {
                    <div class="reader__missing">
                        <h1>"Story not found"</h1>
                        <p>"That story isn't in the archive."</p>
                        <A href="/stories" attr:class="btn btn--primary">"Back to stories"</A>
                    </div>
                }
                .into_any(),
            }}
        </PageLayout>
    }
}

#[component]
fn StoryView(story: Story) -> impl IntoView {
    let chapter = RwSignal::new(0_usize);
    let count = story.chapters.len();
    let body = move || {
        let idx = chapter.get().min(count.saturating_sub(1));
        story.chapters.get(idx).map(|md| markdown::render_html(md)).unwrap_or_default()
    };

    view! {
        <article class="reader__story">
            <header>
                <span class="card__badge">{story.arc}</span>
                <h1>{story.title}</h1>
                <p class="reader__progress">{move || format!("Chapter {} of {count}", chapter.get() + 1)}</p>
            </header>
            <div class="reader__body" inner_html=body></div>
            <nav class="reader__nav">
                <button
                    class="btn btn--ghost"
                    disabled=move || chapter.get() == 0
                    on:click=move |_| chapter.update(|c| *c = c.saturating_sub(1))
                >
                    "Previous"
                </button>
                <A href="/stories" attr:class="btn btn--ghost">"All stories"</A>
                <button
                    class="btn btn--ghost"
                    disabled=move || chapter.get() + 1 >= count
                    on:click=move |_| chapter.update(|c| *c = (*c + 1).min(count.saturating_sub(1)))
                >
                    "Next"
                </button>
            </nav>
        </article>
    }
}
