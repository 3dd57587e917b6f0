//! # azu - English-to-Japanese translation with vocabulary extraction
//!
//! `azu` sends English text to an OpenAI-compatible chat completion endpoint,
//! asks for a Japanese translation plus a table of interesting vocabulary in
//! a single prompt, and turns the free-form reply into structured data.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file and show the vocabulary table
//! azu ./diary.txt
//!
//! # Translate inline text and save the table as vocabulary_extraction.csv
//! azu --text "I went hiking with my friends." --export
//!
//! # Interactive session
//! azu chat
//! ```
//!
//! ## Configuration
//!
//! Without a config file, azu uses OpenAI (`gpt-3.5-turbo`) and reads the key
//! from `OPENAI_API_KEY`. Both can be changed in `~/.config/azu/config.toml`:
//!
//! ```toml
//! [azu]
//! model = "gpt-4o-mini"
//! api_key_env = "AZU_OPENAI_KEY"
//! models = ["gpt-4o-mini", "gpt-4o"]
//! ```
//!
//! ## Reply format
//!
//! [`vocabulary::parse_reply`] takes everything before the first blank line
//! as the translation and every later `a | b | c` line as a vocabulary row,
//! dropping the first one as the echoed table header.

/// Interactive translation session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Error taxonomy for translate-and-extract actions.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files, and stdin.
pub mod input;

/// Global output configuration (quiet/verbose mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// A single translate-and-extract action.
pub mod pipeline;

/// Completion client for OpenAI-compatible APIs.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;

/// Reply parsing, table rendering, and CSV export.
pub mod vocabulary;
