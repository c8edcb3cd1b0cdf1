//! Session model, route table, and the session gate state machine.
//!
//! This crate owns the framework-free decision logic used by the `lcbad`
//! browser app. Nothing here touches the DOM or the router directly: the app
//! feeds session snapshots and route requests in, and renders whatever
//! [`GateView`] comes back out.

pub mod gate;
pub mod route;
pub mod session;

pub use gate::{Evaluation, Gate, GateState, GateView, Redirect, decide};
pub use route::{Route, RouteRequest, sanitize_redirect, strip_base};
pub use session::{CheckTicket, Session, SessionError, SessionStore, User};
