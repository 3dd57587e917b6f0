use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::{InputReader, InputSource};
use crate::pipeline::{translate_and_extract, validate_action};
use crate::translation::CompletionClient;
use crate::ui::{Spinner, Style};
use crate::vocabulary::{
    DEFAULT_EXPORT_FILE, NO_VOCABULARY_WARNING, ParsedResult, export_csv, print_result,
};

const EXCEL_HINT: &str =
    "Open the CSV with Google Sheets or another UTF-8 aware tool; Excel may garble Japanese text.";

pub struct TranslateOptions {
    pub file: Option<String>,
    pub text: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub export: Option<PathBuf>,
    pub json: bool,
}

impl TranslateOptions {
    /// `--output` wins over `--export`; either one turns exporting on.
    pub fn export_path(export: bool, output: Option<PathBuf>) -> Option<PathBuf> {
        output.or_else(|| export.then(|| PathBuf::from(DEFAULT_EXPORT_FILE)))
    }
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let resolved = resolve_config(
        &ResolveOptions {
            model: options.model.clone(),
            api_key: options.api_key.clone(),
        },
        &config_file,
    );

    // no key means nothing else is worth doing, not even reading stdin
    resolved.check_credential()?;

    let source_text = InputReader::read(InputSource::from_args(
        options.text.as_deref(),
        options.file.as_deref(),
    ))?;
    validate_action(&resolved, &source_text)?;

    crate::debug!("endpoint: {}, model: {}", resolved.endpoint, resolved.model);

    let client = CompletionClient::from_config(&resolved);

    let spinner = Spinner::new("Processing...");
    let result = translate_and_extract(&client, &source_text).await;
    spinner.stop();
    let parsed = result?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        if !parsed.has_vocabulary() {
            crate::warn!("{}", Style::warning(NO_VOCABULARY_WARNING));
        }
    } else {
        print_result(&parsed)?;
    }

    if let Some(path) = &options.export {
        export_vocabulary(path, &parsed)?;
    }

    Ok(())
}

/// Writes the vocabulary table as CSV, skipping the file when there is nothing to write.
pub fn export_vocabulary(path: &Path, result: &ParsedResult) -> Result<()> {
    if !result.has_vocabulary() {
        crate::warn!(
            "{} No vocabulary to export; {} was not written",
            Style::warning("Warning:"),
            path.display()
        );
        return Ok(());
    }

    let rows = export_csv(path, &result.vocabulary)?;
    crate::status!(
        "{} Exported {} vocabulary rows to {}",
        Style::success("✓"),
        rows,
        Style::secondary(path.display())
    );
    // UTF-8 without a BOM
    crate::status!("{}", Style::hint(EXCEL_HINT));
    Ok(())
}
