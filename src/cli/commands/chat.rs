use anyhow::Result;

use crate::chat::ChatSession;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::ui::prompt_api_key;

pub struct ChatOptions {
    pub model: Option<String>,
    pub api_key: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

/// Resolves the session's settings, asking for the API key once if it is missing.
fn load_session_config(options: ChatOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let mut config = resolve_config(
        &ResolveOptions {
            model: options.model,
            api_key: options.api_key,
        },
        &file_config,
    );

    if config.check_credential().is_err() {
        config.api_key = prompt_api_key()?;
        config.check_credential()?;
    }

    Ok(config)
}
