//! Terminal rendering of a parsed reply.

use std::io::{self, Write};

use super::export::CSV_HEADERS;
use super::model::{ParsedResult, VocabRow};
use crate::ui::Style;

/// Shown when a reply yields no vocabulary rows.
pub const NO_VOCABULARY_WARNING: &str =
    "No vocabulary was extracted. Please check the input or try again.";

/// Renders the translation and vocabulary table.
///
/// Japanese text has no fixed column width in a terminal, so each row is a
/// numbered block headed by the word, with the other columns as labeled lines.
pub fn render_result<W: Write>(out: &mut W, result: &ParsedResult) -> io::Result<()> {
    writeln!(out, "{}", Style::header("Translation"))?;
    for line in result.translation.lines() {
        writeln!(out, "  {line}")?;
    }

    if !result.has_vocabulary() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", Style::header("Interesting Vocabulary"))?;
    for (index, row) in result.vocabulary.iter().enumerate() {
        render_row(out, index + 1, row)?;
    }

    Ok(())
}

fn render_row<W: Write>(out: &mut W, number: usize, row: &VocabRow) -> io::Result<()> {
    let [_, translation_label, example_label] = CSV_HEADERS;
    writeln!(out, "  {number:>3}. {}", Style::value(&row.word))?;
    writeln!(
        out,
        "       {} {}",
        Style::label(format!("{translation_label}:")),
        row.translation_of_word
    )?;
    if !row.example_sentence.is_empty() {
        writeln!(
            out,
            "       {} {}",
            Style::label(format!("{example_label}:")),
            Style::hint(&row.example_sentence)
        )?;
    }
    Ok(())
}

/// Renders to stdout and warns on stderr when no vocabulary was found.
pub fn print_result(result: &ParsedResult) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    render_result(&mut stdout, result)?;
    stdout.flush()?;

    if !result.has_vocabulary() {
        crate::warn!("{}", Style::warning(NO_VOCABULARY_WARNING));
    }
    Ok(())
}
