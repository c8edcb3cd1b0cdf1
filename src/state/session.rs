//! Session context shared by the router shell, the gate, and the navbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `SessionStore` from the `gate` crate is the only owner of the session.
//! `SessionContext` wraps it in a signal and is provided once by `App`;
//! components receive it explicitly through `expect_context` instead of
//! reaching for a global. Lifecycle:
//!
//! - created loading when `App` mounts
//! - resolved once by `start()` (async auth check bounded by a timeout)
//! - mutated by `sign_in` / `sign_out`
//! - disposed with the `App` owner; late check results are discarded

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gate::{CheckTicket, Session, SessionStore, User};
use leptos::prelude::*;

use crate::config::AppConfig;

#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
    check_delay_ms: u64,
    timeout_ms: u64,
}

impl SessionContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: RwSignal::new(SessionStore::new()),
            check_delay_ms: config.session_check_delay_ms,
            timeout_ms: config.session_timeout_ms,
        }
    }

    /// Current snapshot. Tracked: reading inside a reactive scope subscribes.
    pub fn snapshot(&self) -> Session {
        self.store.with(SessionStore::snapshot)
    }

    /// Signed-in user, if any. Tracked.
    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.snapshot().user)
    }

    /// Run the auth check. Calling again (retry) supersedes a check still in flight.
    pub fn start(&self) {
        let Some(ticket) = self.begin() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let store = self.store;
            let (delay_ms, timeout_ms) = (self.check_delay_ms, self.timeout_ms);
            leptos::task::spawn_local(async move {
                let outcome = check_with_timeout(delay_ms, timeout_ms).await;
                store.try_update(|s| s.complete(ticket, outcome));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.check_delay_ms, self.timeout_ms);
            let outcome = crate::net::auth::load_stored_user();
            self.store.update(|s| {
                s.complete(ticket, outcome);
            });
        }
    }

    /// Issue a new check ticket. `None` once the store has been disposed.
    fn begin(&self) -> Option<CheckTicket> {
        let ticket = self.store.try_update(SessionStore::begin_check)?;
        log::debug!("session: auth check started");
        Some(ticket)
    }

    pub fn retry(&self) {
        self.start();
    }

    pub fn sign_in(&self, user: User) {
        self.store.update(|s| s.sign_in(user));
    }

    pub fn sign_out(&self) {
        crate::net::auth::sign_out();
        self.store.update(SessionStore::sign_out);
    }
}

/// Race the auth check against the timeout so a check that never settles
/// surfaces as an error instead of an endless spinner.
#[cfg(feature = "csr")]
async fn check_with_timeout(delay_ms: u64, timeout_ms: u64) -> Result<Option<User>, gate::SessionError> {
    use futures::future::{Either, select};
    use std::time::Duration;

    let check = Box::pin(crate::net::auth::check_session(delay_ms));
    let timeout = Box::pin(gloo_timers::future::sleep(Duration::from_millis(timeout_ms)));
    match select(check, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(gate::SessionError::Timeout { after_ms: timeout_ms }),
    }
}
