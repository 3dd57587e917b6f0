//! Subcommand implementations.

/// Interactive session command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// One-shot translation command handler.
pub mod translate;
