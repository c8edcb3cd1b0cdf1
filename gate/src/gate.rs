//! Session gate: decides whether protected content may render.
//!
//! DESIGN
//! ======
//! The gate is an explicit state machine over the session snapshot:
//!
//! ```text
//!            ┌──────────► Authenticated ──► render content
//! Loading ───┼──────────► Unauthenticated ─► redirect to login (once)
//!            └──────────► Error ────────────► visible message + retry
//! ```
//!
//! `decide` is pure and drives rendering. `Gate` adds a per-mount latch so the
//! navigation side effect fires once per unauthenticated episode, no matter
//! how often the view re-renders.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::route::RouteRequest;
use crate::session::{Session, SessionError};

/// Gate state derived from a session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Authenticated,
    Unauthenticated,
    Error(SessionError),
}

impl GateState {
    /// Loading wins over everything, then errors, then the auth flag.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        if session.is_loading {
            return Self::Loading;
        }
        if let Some(err) = &session.error {
            return Self::Error(err.clone());
        }
        if session.is_authenticated {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// Navigation instruction towards the login surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
}

/// What the gate renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Neutral loading indicator.
    Pending,
    /// The protected content, unchanged.
    Protected,
    /// Nothing but a redirect to the login surface.
    Redirect(Redirect),
    /// Session resolution failed.
    Failed { message: String, retryable: bool },
}

/// Map a session snapshot and the current request to a view.
#[must_use]
pub fn decide(session: &Session, request: &RouteRequest, login_path: &str) -> GateView {
    match GateState::from_session(session) {
        GateState::Loading => GateView::Pending,
        GateState::Authenticated => GateView::Protected,
        GateState::Unauthenticated => GateView::Redirect(request.login_redirect(login_path)),
        GateState::Error(err) => GateView::Failed {
            message: format!("We couldn't confirm your session ({err})."),
            retryable: !matches!(err, SessionError::Corrupted(_)),
        },
    }
}

/// Output of one gate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub view: GateView,
    /// Set only when navigation must be issued now.
    pub navigate: Option<Redirect>,
}

/// Per-mount gate holding the redirect latch.
#[derive(Clone, Debug)]
pub struct Gate {
    login_path: String,
    redirected: bool,
}

impl Gate {
    #[must_use]
    pub fn new(login_path: impl Into<String>) -> Self {
        Self { login_path: login_path.into(), redirected: false }
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Evaluate the gate. Repeated unauthenticated evaluations navigate only
    /// once; leaving the unauthenticated state re-arms the latch.
    pub fn evaluate(&mut self, session: &Session, request: &RouteRequest) -> Evaluation {
        let view = decide(session, request, &self.login_path);
        let navigate = match &view {
            GateView::Redirect(redirect) if !self.redirected => {
                self.redirected = true;
                log::info!("gate: redirecting {} to {}", request.path, redirect.to);
                Some(redirect.clone())
            }
            GateView::Redirect(_) => None,
            _ => {
                self.redirected = false;
                None
            }
        };
        Evaluation { view, navigate }
    }
}
