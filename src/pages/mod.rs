//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome to
//! `components`. Every page except `auth` and `not_found` is mounted behind
//! `SessionGate` by the app shell.

pub mod about;
pub mod anonymous_chat;
pub mod assistant;
pub mod auth;
pub mod characters;
pub mod index;
pub mod not_found;
pub mod stories;
pub mod story_reader;
