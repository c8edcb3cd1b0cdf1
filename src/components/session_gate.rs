//! Route guard wrapping every protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering follows `gate::decide` on the current session snapshot. The
//! redirect side effect runs in a separate effect through a per-mount
//! `gate::Gate`, so re-renders with an unchanged session never navigate twice.
//! This is a UX guard only; there is no server to enforce anything.

use gate::{Gate, GateView, Route, RouteRequest, strip_base};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::AppConfig;
use crate::state::session::SessionContext;

#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let navigate = use_navigate();
    let login_path = Route::Auth.path();

    let request = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let search = location.search.get();
        let path = strip_base(&config.base_path, &pathname);
        let search = search.trim_start_matches('?');
        if search.is_empty() {
            RouteRequest::new(path)
        } else {
            RouteRequest::new(format!("{path}?{search}"))
        }
    });

    let gate_view = {
        let login_path = login_path.clone();
        Memo::new(move |_| gate::decide(&session.snapshot(), &request.get(), &login_path))
    };

    let latch = StoredValue::new(Gate::new(login_path));
    Effect::new(move || {
        let snapshot = session.snapshot();
        let req = request.get();
        let navigate_to = latch.try_update_value(|g| g.evaluate(&snapshot, &req).navigate).flatten();
        if let Some(redirect) = navigate_to {
            navigate(&redirect.to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match gate_view.get() {
        GateView::Pending => view! {
            <div class="session-gate session-gate--pending" role="status">
                <span class="spinner" aria-hidden="true"></span>
                <span>"Checking your session..."</span>
            </div>
        }
        .into_any(),
        GateView::Protected => children().into_any(),
        GateView::Redirect(_) => ().into_any(),
        GateView::Failed { message, retryable } => view! {
            <div class="session-gate session-gate--failed" role="alert">
                <h2>"Something went wrong"</h2>
                <p>{message}</p>
                <div class="session-gate__actions">
                    <Show when=move || retryable>
                        <button class="btn btn--primary" on:click=move |_| session.retry()>
                            "Try again"
                        </button>
                    </Show>
                    <A href="/auth" attr:class="btn btn--ghost">"Go to sign in"</A>
                </div>
            </div>
        }
        .into_any(),
    }
}
