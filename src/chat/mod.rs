//! Interactive translation session.
//!
//! Each entry is translated independently; the session only remembers the
//! result currently on screen so it can be exported.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::ChatSession;
