//! Splits a completion reply into a translation and a vocabulary table.
//!
//! The model is asked for a plain-text translation, a blank line, then a
//! `Vocabulary | Translation | Example` table. Models follow that loosely, so
//! parsing is structural and never fails: the worst case is the fallback
//! translation with no vocabulary.

use super::model::{ParsedResult, VocabRow};

/// Shown in place of the translation when the reply has none.
pub const NO_TRANSLATION_FALLBACK: &str = "No translation provided.";

const BLOCK_SEPARATOR: &str = "\n\n";
const COLUMN_SEPARATOR: char = '|';

/// Parses a raw completion reply.
///
/// Everything before the first blank line is the translation. Each later line
/// with exactly three `|`-separated cells becomes a row, except the first such
/// line, which is taken to be the table header echoed by the model.
///
/// # Example
///
/// ```
/// use azu_cli::vocabulary::parse_reply;
///
/// let reply = "猫が好きです。\n\nVocabulary | Translation | Example\n猫 | cat | 猫が好きです。";
/// let parsed = parse_reply(reply);
/// assert_eq!(parsed.translation, "猫が好きです。");
/// assert_eq!(parsed.vocabulary.len(), 1);
/// ```
pub fn parse_reply(raw_text: &str) -> ParsedResult {
    let (head, rest) = raw_text
        .split_once(BLOCK_SEPARATOR)
        .unwrap_or((raw_text, ""));

    ParsedResult {
        translation: parse_translation(head),
        vocabulary: parse_vocabulary(rest),
    }
}

fn parse_translation(head: &str) -> String {
    let translation = head.trim();
    if translation.is_empty() {
        NO_TRANSLATION_FALLBACK.to_string()
    } else {
        translation.to_string()
    }
}

fn parse_vocabulary(block: &str) -> Vec<VocabRow> {
    block
        .lines()
        .filter_map(parse_row)
        // first qualifying row is the echoed header
        .skip(1)
        .collect()
}

/// Cell 0 is stored as the row's translation and cell 1 as its word, the
/// reverse of the column order the prompt declares.
fn parse_row(line: &str) -> Option<VocabRow> {
    if !line.contains(COLUMN_SEPARATOR) {
        return None;
    }

    let cells: Vec<&str> = line.split(COLUMN_SEPARATOR).map(str::trim).collect();
    let [translation_of_word, word, example_sentence] = cells.as_slice() else {
        return None;
    };

    Some(VocabRow::new(*word, *translation_of_word, *example_sentence))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_without_blank_line() {
        let parsed = parse_reply("  こんにちは、世界。 \n二行目 ");
        assert_eq!(parsed.translation, "こんにちは、世界。 \n二行目");
        assert!(parsed.vocabulary.is_empty());
    }

    #[test]
    fn test_parse_reply_drops_first_row() {
        let parsed =
            parse_reply("こんにちは\n\nVocab|Trans|こんにちは means hello\nWord|Meaning|Example");
        assert_eq!(parsed.translation, "こんにちは");
        assert_eq!(
            parsed.vocabulary,
            vec![VocabRow::new("Meaning", "Word", "Example")]
        );
    }

    #[test]
    fn test_parse_reply_empty_head_uses_fallback() {
        let parsed = parse_reply("\n\nA | B | C\nD | E | F");
        assert_eq!(parsed.translation, NO_TRANSLATION_FALLBACK);
        assert_eq!(parsed.vocabulary, vec![VocabRow::new("E", "D", "F")]);
    }

    #[test]
    fn test_parse_reply_whitespace_head_uses_fallback() {
        let parsed = parse_reply("   \t\n\nrest");
        assert_eq!(parsed.translation, NO_TRANSLATION_FALLBACK);
    }

    #[test]
    fn test_parse_reply_empty_string() {
        let parsed = parse_reply("");
        assert_eq!(parsed.translation, NO_TRANSLATION_FALLBACK);
        assert!(parsed.vocabulary.is_empty());
    }

    #[test]
    fn test_parse_reply_empty_rest() {
        let parsed = parse_reply("翻訳\n\n");
        assert_eq!(parsed.translation, "翻訳");
        assert!(parsed.vocabulary.is_empty());
    }

    #[test]
    fn test_parse_reply_splits_on_first_blank_line_only() {
        let parsed = parse_reply("一段落目\n\n二段落目\n\nh1 | h2 | h3\na | b | c");
        assert_eq!(parsed.translation, "一段落目");
        assert_eq!(parsed.vocabulary, vec![VocabRow::new("b", "a", "c")]);
    }

    #[test]
    fn test_parse_row_rejects_wrong_cell_count() {
        assert!(parse_row("a | b").is_none());
        assert!(parse_row("a | b | c | d").is_none());
        assert!(parse_row("| a | b | c |").is_none());
        assert!(parse_row("no separator here").is_none());
    }

    #[test]
    fn test_parse_row_trims_cells() {
        let row = parse_row("  cat \t|  猫 | 猫が好きです。  ").unwrap();
        assert_eq!(row.word, "猫");
        assert_eq!(row.translation_of_word, "cat");
        assert_eq!(row.example_sentence, "猫が好きです。");
    }

    #[test]
    fn test_parse_row_allows_empty_cells() {
        let row = parse_row("||").unwrap();
        assert_eq!(row, VocabRow::new("", "", ""));
    }

    #[test]
    fn test_markdown_table_rows_are_discarded() {
        // leading/trailing pipes give five cells
        let reply = "訳\n\n| Vocabulary | Translation | Example |\n|---|---|---|\n| 猫 | cat | 猫です |";
        assert!(parse_reply(reply).vocabulary.is_empty());
    }

    #[test]
    fn test_invalid_lines_skipped_anywhere() {
        let reply = "訳\n\nnoise\nh1|h2|h3\nbad|row\nw1|t1|e1\nx|y|z|extra\n\nw2|t2|e2\ntrailing";
        let parsed = parse_reply(reply);
        assert_eq!(
            parsed.vocabulary,
            vec![VocabRow::new("t1", "w1", "e1"), VocabRow::new("t2", "w2", "e2")]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_reply("訳\r\n\r\nh1|h2|h3\r\nw|t|e\r\n");
        // "\r\n\r\n" contains no "\n\n", so everything is translation
        assert!(parsed.vocabulary.is_empty());

        let parsed = parse_reply("訳\n\nh1|h2|h3\r\nw|t|e\r\n");
        assert_eq!(parsed.vocabulary, vec![VocabRow::new("t", "w", "e")]);
    }

    #[test]
    fn test_only_pipes() {
        let parsed = parse_reply("||||||\n\n|||\n||\n|");
        assert_eq!(parsed.translation, "||||||");
        assert!(parsed.vocabulary.is_empty());
    }

    #[test]
    fn test_many_lines() {
        let mut reply = String::from("訳\n\nh1|h2|h3\n");
        for i in 0..5000 {
            reply.push_str(&format!("w{i}|t{i}|e{i}\n"));
        }
        let parsed = parse_reply(&reply);
        assert_eq!(parsed.vocabulary.len(), 5000);
        assert_eq!(parsed.vocabulary[0], VocabRow::new("t0", "w0", "e0"));
        assert_eq!(
            parsed.vocabulary[4999],
            VocabRow::new("t4999", "w4999", "e4999")
        );
    }
}
