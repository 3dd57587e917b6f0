//! Error taxonomy for a single translate-and-extract action.
//!
//! Every variant is recoverable: the one-shot command maps it to an exit code,
//! the interactive session prints it and keeps going.

use thiserror::Error;

/// Why a completion request did not produce a usable reply.
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// The service refused the credential (HTTP 401/403).
    #[error("authentication rejected (HTTP {status}): {message}")]
    Authentication { status: u16, message: String },

    /// The service answered with some other non-success status.
    #[error("request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got a response.
    #[error("failed to reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but did not contain completion text.
    #[error("malformed response from completion service: {0}")]
    MalformedResponse(String),
}

/// A translate-and-extract action that could not run to completion.
#[derive(Debug, Error)]
pub enum AzuError {
    #[error(
        "Please enter your API key.\n\n\
         Provide it via:\n  \
         - CLI option: azu --api-key <key>\n  \
         - Environment: OPENAI_API_KEY (or the variable named by api_key_env)\n  \
         - Config file: api_key in ~/.config/azu/config.toml"
    )]
    MissingCredential,

    #[error("Please enter some English text.")]
    EmptyInput,

    #[error("An unexpected error occurred: {0}")]
    Request(#[from] RequestFailure),
}

/// Maps an application error to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AzuError>() {
        Some(AzuError::MissingCredential | AzuError::EmptyInput) => exitcode::USAGE,
        Some(AzuError::Request(_)) => exitcode::UNAVAILABLE,
        None => exitcode::SOFTWARE,
    }
}
