use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::path::Path;

use super::model::VocabRow;
use crate::fs::atomic_write;

/// Header row of the exported CSV.
pub const CSV_HEADERS: [&str; 3] = ["Vocabulary", "Translation", "Example Sentence Using the Word"];

/// File name used when no export path is given.
pub const DEFAULT_EXPORT_FILE: &str = "vocabulary_extraction.csv";

/// Serializes rows as UTF-8 CSV with a header line.
///
/// Cells containing commas, quotes or newlines are quoted, so reading the
/// output back with a CSV reader yields the original cell values.
pub fn to_csv_string(rows: &[VocabRow]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;
    for row in rows {
        writer
            .write_record(row.as_record())
            .context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Writes rows to `path` as CSV, replacing any existing file.
///
/// Returns the number of data rows written.
pub fn export_csv(path: &Path, rows: &[VocabRow]) -> Result<usize> {
    let contents = to_csv_string(rows)?;
    atomic_write(path, &contents)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(rows.len())
}
