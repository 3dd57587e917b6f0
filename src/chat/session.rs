use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, Text};
use std::path::{Path, PathBuf};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::cli::commands::translate::export_vocabulary;
use crate::cli::report_error;
use crate::config::ResolvedConfig;
use crate::error::AzuError;
use crate::pipeline::{translate_and_extract, validate_action};
use crate::translation::CompletionClient;
use crate::ui::{Spinner, Style};
use crate::vocabulary::{DEFAULT_EXPORT_FILE, ParsedResult, print_result};

/// An interactive translation session.
///
/// Provides a REPL-style interface; every entry is a separate action.
pub struct ChatSession {
    config: ResolvedConfig,
    client: CompletionClient,
    /// The result currently on screen, kept only for `/export`.
    current: Option<ParsedResult>,
}

impl ChatSession {
    /// Creates a new session with the given configuration.
    pub fn new(config: ResolvedConfig) -> Self {
        let client = CompletionClient::from_config(&config);
        Self {
            config,
            client,
            current: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type English text, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(SlashCommand::Quit) => break,
                    Input::Command(SlashCommand::Edit) => match Self::edit_text() {
                        Ok(Some(text)) => self.translate_and_print(&text).await,
                        Ok(None) => {}
                        Err(e) => report_error(&e),
                    },
                    Input::Command(cmd) => self.handle_command(cmd),
                    Input::Text(text) => self.translate_and_print(&text).await,
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&self, cmd: SlashCommand) {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Export(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
                self.export(&path);
            }
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
            // handled by the loop
            SlashCommand::Edit | SlashCommand::Quit => {}
        }
    }

    fn export(&self, path: &Path) {
        let Some(result) = &self.current else {
            ui::print_error("Nothing to export yet. Translate some text first.");
            return;
        };
        if let Err(e) = export_vocabulary(path, result) {
            report_error(&e);
        }
    }

    /// Opens the user's editor for multi-line text. Cancelling returns `None`.
    fn edit_text() -> Result<Option<String>> {
        match Editor::new("English text:")
            .with_file_extension(".txt")
            .prompt()
        {
            Ok(text) => Ok(Some(text)),
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Runs one action. Failures are reported and leave the session usable.
    async fn translate_and_print(&mut self, text: &str) {
        self.current = None;

        if let Err(e) = validate_action(&self.config, text) {
            report_error(&e.into());
            return;
        }

        let spinner = Spinner::new("Processing...");
        let result = translate_and_extract(&self.client, text).await;
        spinner.stop();

        match result {
            Ok(parsed) => {
                if let Err(e) = print_result(&parsed) {
                    report_error(&e.into());
                }
                println!();
                self.current = Some(parsed);
            }
            Err(e @ AzuError::Request(_)) => {
                report_error(&e.into());
                eprintln!("{}", Style::hint("Nothing was translated. Check /config and try again."));
                eprintln!();
            }
            Err(e) => report_error(&e.into()),
        }
    }
}
