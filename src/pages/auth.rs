//! Login surface: sign in or sign up against the demo auth provider.
//!
//! Not gated. After a successful sign in the visitor is sent to the
//! sanitized `redirect` query target, or `/`.

use gate::RouteRequest;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::AppConfig;
use crate::content::SITE_TITLE;
use crate::net::auth::{self, Credentials};
use crate::state::session::SessionContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    SignUp,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let delay_ms = expect_context::<AppConfig>().session_check_delay_ms;
    let location = use_location();
    let navigate = use_navigate();

    let target = Memo::new(move |_| {
        RouteRequest::from_path_and_query(location.pathname.get(), &location.search.get()).post_login_target()
    });

    // Already signed in: skip the form.
    Effect::new(move || {
        let snapshot = session.snapshot();
        if snapshot.is_authenticated && !snapshot.is_loading {
            navigate(&target.get(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let tab = RwSignal::new(AuthTab::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let validated = match tab.get_untracked() {
            AuthTab::SignIn => auth::validate_sign_in(&email.get_untracked(), &password.get_untracked()),
            AuthTab::SignUp => {
                auth::validate_sign_up(&name.get_untracked(), &email.get_untracked(), &password.get_untracked())
            }
        };
        match validated {
            Ok(credentials) => {
                busy.set(true);
                info.set("Signing in...".to_owned());
                submit(session, credentials, delay_ms, busy, info);
            }
            Err(e) => info.set(e.to_string()),
        }
    };

    let tab_class = move |t: AuthTab| {
        if tab.get() == t { "auth-card__tab auth-card__tab--active" } else { "auth-card__tab" }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{SITE_TITLE}</h1>
                <p class="auth-card__subtitle">"Sign in to enter the dream."</p>
                <div class="auth-card__tabs" role="tablist">
                    <button class=move || tab_class(AuthTab::SignIn) on:click=move |_| tab.set(AuthTab::SignIn)>
                        "Sign in"
                    </button>
                    <button class=move || tab_class(AuthTab::SignUp) on:click=move |_| tab.set(AuthTab::SignUp)>
                        "Sign up"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || tab.get() == AuthTab::SignUp>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Display name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || match tab.get() {
                            AuthTab::SignIn => "Sign in",
                            AuthTab::SignUp => "Create account",
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

fn submit(session: SessionContext, credentials: Credentials, delay_ms: u64, busy: RwSignal<bool>, info: RwSignal<String>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let user = auth::sign_in(credentials, delay_ms).await;
        info.try_set(String::new());
        busy.try_set(false);
        session.sign_in(user);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, credentials, delay_ms, busy, info);
    }
}
