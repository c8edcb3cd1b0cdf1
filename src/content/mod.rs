//! Static content of the "Life Could Be A Dream" universe.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render straight from these tables and the assistant answers
//! questions by searching them, so everything here is `'static` data with
//! small lookup helpers.

pub mod about;
pub mod characters;
pub mod stories;

/// Site title shown in the navbar and page titles.
pub const SITE_TITLE: &str = "Life Could Be A Dream";
