//! Character roster page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_layout::PageLayout;
use crate::content::characters::CHARACTERS;
use crate::content::stories;

#[component]
pub fn CharactersPage() -> impl IntoView {
    view! {
        <PageLayout class="characters">
            <h1>"Characters"</h1>
            <div class="card-grid">
                {CHARACTERS
                    .iter()
                    .map(|c| {
                        let first = stories::story_by_id(c.first_appearance).map_or(c.first_appearance, |s| s.title);
                        view! {
                            <article class="card character-card" id=c.slug>
                                <h2>{c.name}</h2>
                                <span class="card__badge">{c.role}</span>
                                <p>{c.bio}</p>
                                <ul class="character-card__powers">
                                    {c.powers.iter().map(|p| view! { <li>{*p}</li> }).collect::<Vec<_>>()}
                                </ul>
                                <p class="character-card__first">
                                    "First appearance: "
                                    <A href=format!("/read/{}", c.first_appearance)>{first}</A>
                                </p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </PageLayout>
    }
}
