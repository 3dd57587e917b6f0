//! One user action: check preconditions, request a completion, parse it.
//!
//! Nothing here keeps state between actions; every input is a parameter.

use crate::config::ResolvedConfig;
use crate::error::AzuError;
use crate::translation::{CompletionClient, CompletionRequest};
use crate::vocabulary::{ParsedResult, parse_reply};

/// Rejects an action before any request is made.
///
/// The credential is checked first, so a missing key is reported even when
/// the text is blank too.
pub fn validate_action(config: &ResolvedConfig, source_text: &str) -> Result<(), AzuError> {
    config.check_credential()?;
    if source_text.trim().is_empty() {
        return Err(AzuError::EmptyInput);
    }
    Ok(())
}

/// Requests a translation of `source_text` and parses the reply.
///
/// Callers run [`validate_action`] first.
pub async fn translate_and_extract(
    client: &CompletionClient,
    source_text: &str,
) -> Result<ParsedResult, AzuError> {
    let request = CompletionRequest::new(source_text);
    let reply = client.request_completion(&request).await?;

    crate::debug!("reply: {} chars", reply.raw_text.chars().count());

    let parsed = parse_reply(&reply.raw_text);
    crate::debug!("extracted {} vocabulary rows", parsed.vocabulary.len());
    Ok(parsed)
}
