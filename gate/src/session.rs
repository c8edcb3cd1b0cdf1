//! Session snapshot and the provider-side store that owns it.
//!
//! DESIGN
//! ======
//! `SessionStore` is the single writer. Consumers only ever see a `Session`
//! snapshot. Auth checks are identified by a `CheckTicket`; only the newest
//! ticket may complete, so an older check that settles late is dropped
//! instead of overwriting a newer result.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier.
    pub id: String,
    /// Display name shown in the navbar.
    pub name: String,
    /// Email used to sign in.
    pub email: String,
}

impl User {
    /// Encode for persistence.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode a persisted user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupted`] when `raw` is not a valid encoded user.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        serde_json::from_str(raw).map_err(|e| SessionError::Corrupted(e.to_string()))
    }
}

/// Why the provider could not resolve the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The auth check did not settle in time.
    #[error("session check timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },
    /// The auth backend could not be reached.
    #[error("session service unavailable: {0}")]
    Unavailable(String),
    /// Stored credentials could not be read back.
    #[error("stored session is corrupted: {0}")]
    Corrupted(String),
}

/// Read-only snapshot of the current authentication status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<User>,
    pub error: Option<SessionError>,
}

impl Session {
    /// Initial state before the first auth check resolves.
    #[must_use]
    pub fn loading() -> Self {
        Self { is_authenticated: false, is_loading: true, user: None, error: None }
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { is_authenticated: true, is_loading: false, user: Some(user), error: None }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { is_authenticated: false, is_loading: false, user: None, error: None }
    }

    #[must_use]
    pub fn failed(error: SessionError) -> Self {
        Self { is_authenticated: false, is_loading: false, user: None, error: Some(error) }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

/// Identifies one in-flight auth check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckTicket(u64);

/// Owner of the session. Every mutation goes through here.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    session: Session,
    latest: u64,
    resolved: bool,
}

impl SessionStore {
    /// Fresh store, loading and unauthenticated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    /// Whether any check or auth event has resolved the session yet.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Start a new auth check, superseding any check still in flight.
    ///
    /// A store that has never resolved (or whose last check failed) goes back
    /// to loading; a resolved session keeps its state while it is refreshed.
    pub fn begin_check(&mut self) -> CheckTicket {
        self.latest += 1;
        if !self.resolved || self.session.error.is_some() {
            self.session = Session::loading();
        }
        CheckTicket(self.latest)
    }

    /// Apply the outcome of a check. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: CheckTicket, outcome: Result<Option<User>, SessionError>) -> bool {
        if ticket.0 != self.latest {
            log::debug!("session: dropping stale check {} (latest {})", ticket.0, self.latest);
            return false;
        }
        self.session = match outcome {
            Ok(Some(user)) => Session::signed_in(user),
            Ok(None) => Session::signed_out(),
            Err(e) => {
                log::warn!("session: check failed: {e}");
                Session::failed(e)
            }
        };
        self.resolved = true;
        true
    }

    /// Record a successful sign in. Invalidates in-flight checks.
    pub fn sign_in(&mut self, user: User) {
        self.latest += 1;
        log::info!("session: signed in as {}", user.id);
        self.session = Session::signed_in(user);
        self.resolved = true;
    }

    /// Record a sign out. Invalidates in-flight checks.
    pub fn sign_out(&mut self) {
        self.latest += 1;
        log::info!("session: signed out");
        self.session = Session::signed_out();
        self.resolved = true;
    }
}
