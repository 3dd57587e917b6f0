//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{AzuConfig, ConfigManager};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings. Otherwise asks for the default
/// model and saves it.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_configuration();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    println!(
        "{} {}",
        Style::label("config file"),
        Style::secondary(manager.config_path().display())
    );
    if !manager.exists() {
        println!("{}", Style::hint("(not created yet, using built-in defaults)"));
    }
    println!();
    print_current_settings(&config.azu);
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_settings(&config.azu);

    let model = select_model(&config.azu.model_choices(), config.azu.model.as_deref())?;
    config.azu.model = Some(model);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_settings(azu: &AzuConfig) {
    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(azu.endpoint())
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        azu.model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    let key_status = if azu.get_api_key().is_some() {
        Style::success("(set)")
    } else {
        Style::warning("(not set)")
    };
    println!(
        "  {}   {} {}",
        Style::label("api key"),
        key_status,
        Style::hint(format!("from {} or api_key", azu.api_key_env()))
    );
    println!();
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}
