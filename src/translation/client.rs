use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::prompt::{INSTRUCTION_TEMPLATE, build_prompt};
use crate::config::ResolvedConfig;
use crate::error::RequestFailure;

/// One translate-and-extract request. Built once per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub instruction_text: String,
    pub source_text: String,
}

impl CompletionRequest {
    /// Uses the fixed instruction template.
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            instruction_text: INSTRUCTION_TEMPLATE.to_string(),
            source_text: source_text.into(),
        }
    }

    /// The single user message sent to the model.
    pub fn prompt(&self) -> String {
        build_prompt(&self.instruction_text, &self.source_text)
    }
}

/// The raw text the model answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReply {
    pub raw_text: String,
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible chat completion endpoint.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self::with_http_client(Client::new(), endpoint, model, api_key)
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        )
    }

    const fn with_http_client(
        client: Client,
        endpoint: String,
        model: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint,
            model,
            api_key,
        }
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    /// Sends one non-streaming completion request and returns the reply text.
    pub async fn request_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionReply, RequestFailure> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: Cow::Owned(request.prompt()),
            }],
        };

        crate::debug!("POST {url} (model: {})", self.model);

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let transport = |source| RequestFailure::Transport {
            url: url.clone(),
            source,
        };

        let response = http_request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        crate::debug!("HTTP {status}, {} bytes", body.len());

        if !status.is_success() {
            return Err(classify_status(status, &body));
        }

        parse_completion_body(&body)
    }
}

fn classify_status(status: StatusCode, body: &str) -> RequestFailure {
    let message = extract_error_message(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RequestFailure::Authentication {
            status: status.as_u16(),
            message,
        },
        _ => RequestFailure::Rejected {
            status: status.as_u16(),
            message,
        },
    }
}

/// Prefers the `error.message` field of an OpenAI-style error body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body).map_or_else(
        |_| {
            let body = body.trim();
            if body.is_empty() {
                "(empty response body)".to_string()
            } else {
                body.to_string()
            }
        },
        |response| response.error.message,
    )
}

fn parse_completion_body(body: &str) -> Result<CompletionReply, RequestFailure> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| RequestFailure::MalformedResponse(format!("invalid JSON: {e}")))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RequestFailure::MalformedResponse("no choices in response".to_string()))?;

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(CompletionReply { raw_text: content }),
        _ => Err(RequestFailure::MalformedResponse(
            "empty message content".to_string(),
        )),
    }
}
