mod client;
mod prompt;

pub use client::{CompletionClient, CompletionReply, CompletionRequest};
pub use prompt::{INSTRUCTION_TEMPLATE, build_prompt};
