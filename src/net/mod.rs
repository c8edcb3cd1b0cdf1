//! Simulated network calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend. `auth` stands in for the auth service with a fixed
//! delay and `localStorage`, so the rest of the app is written against
//! async calls that could later be pointed at a real provider.

pub mod auth;
