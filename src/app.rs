//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::assistant_widget::AssistantWidget;
use crate::components::session_gate::SessionGate;
use crate::config::AppConfig;
use crate::content::SITE_TITLE;
use crate::pages::{
    about::AboutPage, anonymous_chat::AnonymousChatPage, assistant::AssistantPage, auth::AuthPage,
    characters::CharactersPage, index::IndexPage, not_found::NotFoundPage, stories::StoriesPage,
    story_reader::StoryReaderPage,
};
use crate::state::assistant::AssistantState;
use crate::state::session::SessionContext;

/// Root application component.
///
/// Provides the config, session, and assistant contexts, starts the one-time
/// session check, and mounts the route table under the configured base path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    log::info!("app: mounting under base {:?}", config.base_path);

    let session = SessionContext::new(&config);
    let assistant = RwSignal::new(AssistantState::default());
    let base = config.base_path.clone();

    provide_context(config);
    provide_context(session);
    provide_context(assistant);

    session.start();

    view! {
        <Title text=SITE_TITLE/>

        <Router base=base>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("") view=|| view! { <SessionGate><IndexPage/></SessionGate> }/>
                <Route path=StaticSegment("characters") view=|| view! { <SessionGate><CharactersPage/></SessionGate> }/>
                <Route path=StaticSegment("stories") view=|| view! { <SessionGate><StoriesPage/></SessionGate> }/>
                <Route
                    path=(StaticSegment("read"), ParamSegment("id"))
                    view=|| view! { <SessionGate><StoryReaderPage/></SessionGate> }
                />
                <Route path=StaticSegment("about") view=|| view! { <SessionGate><AboutPage/></SessionGate> }/>
                <Route path=StaticSegment("assistant") view=|| view! { <SessionGate><AssistantPage/></SessionGate> }/>
                <Route
                    path=StaticSegment("anonymous-chat")
                    view=|| view! { <SessionGate><AnonymousChatPage/></SessionGate> }
                />
            </Routes>
            <AssistantWidget/>
        </Router>
    }
}
