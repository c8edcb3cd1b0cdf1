//! Guide page for the floating assistant.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::state::assistant::{ASSISTANT_NAME, AssistantState};

const EXAMPLE_QUESTIONS: &[&str] = &[
    "Who is Atom?",
    "Tell me about the Videogamer arc",
    "How does the power system work?",
    "What are the main themes?",
    "Who is the author?",
];

#[component]
pub fn AssistantPage() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();
    let open_widget = move |_| {
        assistant.update(|a| {
            if !a.open {
                a.toggle();
            }
        });
    };

    view! {
        <PageLayout class="assistant-guide">
            <h1>{ASSISTANT_NAME}</h1>
            <p>
                "The assistant lives in the bubble at the bottom right of every page. "
                "It knows the stories, characters, themes and timeline of the universe."
            </p>
            <h2>"Try asking"</h2>
            <ul class="assistant-guide__examples">
                {EXAMPLE_QUESTIONS.iter().map(|q| view! { <li>{*q}</li> }).collect::<Vec<_>>()}
            </ul>
            <button class="btn btn--primary" on:click=open_widget>
                "Open the assistant"
            </button>
        </PageLayout>
    }
}
