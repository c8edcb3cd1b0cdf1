//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navbar, footer, clock), the session gate
//! wrapper, and the floating assistant, reading shared state from Leptos
//! context providers.

pub mod assistant_widget;
pub mod footer;
pub mod live_clock;
pub mod navbar;
pub mod page_layout;
pub mod session_gate;
