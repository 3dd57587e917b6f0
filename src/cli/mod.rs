//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::error::AzuError;
use crate::ui::Style;

/// Prints an error the way the user should see it.
///
/// Blocked actions (no key, no text) read as warnings; everything else is an
/// error with its cause chain.
pub fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<AzuError>() {
        Some(blocked @ (AzuError::MissingCredential | AzuError::EmptyInput)) => {
            crate::warn!("{} {blocked}", Style::warning("Warning:"));
        }
        // Display already includes the cause
        Some(failure) => crate::warn!("{} {failure}", Style::error("Error:")),
        None => crate::warn!("{} {err:#}", Style::error("Error:")),
    }
}
