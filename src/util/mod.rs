//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clocks,
//! markdown rendering) from page and component logic so they stay testable
//! outside the browser.

pub mod clock;
pub mod markdown;
pub mod storage;
