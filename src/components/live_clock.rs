//! Ticking clock shown in the navbar and on the home page.

use leptos::prelude::*;

use crate::util::clock::{self, ClockVariant, TimeParts};

#[component]
pub fn LiveClock(
    #[prop(default = true)] show_seconds: bool,
    #[prop(optional)] show_date: bool,
    #[prop(optional)] variant: ClockVariant,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let now = RwSignal::new(clock::now_ms());

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                now.set(clock::now_ms());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let parts = move || TimeParts::from_ms(now.get());
    let outer = format!("{} {class}", variant.class());

    view! {
        <div class=outer>
            <svg class="live-clock__icon" viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="10"></circle>
                <polyline points="12 6 12 12 16 14"></polyline>
            </svg>
            <div class="live-clock__text">
                <span class="live-clock__time">{move || clock::format_time(&parts(), show_seconds)}</span>
                <Show when=move || show_date>
                    <span class="live-clock__date">{move || clock::format_date(&parts())}</span>
                </Show>
            </div>
        </div>
    }
}
