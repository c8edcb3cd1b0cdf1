//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `assistant`, `anon_chat`) so pages
//! and widgets depend on small focused models. The models are plain structs;
//! the app wraps them in `RwSignal`s and hands them out through context.

pub mod anon_chat;
pub mod assistant;
pub mod session;
