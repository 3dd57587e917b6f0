#![allow(clippy::unwrap_used)]
//! Contract tests for reply parsing and CSV export.
//!
//! These pin down the behavior other tools rely on: which part of a reply
//! becomes the translation, which lines become rows, and what the exported
//! CSV looks like.

use azu_cli::vocabulary::{
    CSV_HEADERS, NO_TRANSLATION_FALLBACK, VocabRow, parse_reply, to_csv_string,
};

fn read_csv(contents: &str) -> (Vec<String>, Vec<VocabRow>) {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            assert_eq!(record.len(), 3);
            VocabRow::new(&record[0], &record[1], &record[2])
        })
        .collect();
    (headers, rows)
}

#[test]
fn test_reply_without_blank_line_is_all_translation() {
    for reply in [
        "今日はいい天気です。",
        "  一行目\n二行目 | with | pipes  ",
        "a|b|c\nd|e|f",
    ] {
        let parsed = parse_reply(reply);
        assert_eq!(parsed.translation, reply.trim());
        assert!(parsed.vocabulary.is_empty());
    }
}

#[test]
fn test_first_qualifying_row_is_dropped() {
    let parsed =
        parse_reply("こんにちは\n\nVocab|Trans|こんにちは means hello\nWord|Meaning|Example");

    assert_eq!(parsed.translation, "こんにちは");
    assert_eq!(parsed.vocabulary.len(), 1);
    assert_eq!(parsed.vocabulary[0].word, "Meaning");
    assert_eq!(parsed.vocabulary[0].translation_of_word, "Word");
    assert_eq!(parsed.vocabulary[0].example_sentence, "Example");
}

#[test]
fn test_rows_with_wrong_cell_count_are_excluded() {
    let reply = "訳\n\n\
                 only|two\n\
                 header|row|here\n\
                 one|two|three|four\n\
                 a|b|c\n\
                 |x|y|\n\
                 d|e|f\n\
                 g|h";
    let parsed = parse_reply(reply);

    assert_eq!(
        parsed.vocabulary,
        vec![VocabRow::new("b", "a", "c"), VocabRow::new("e", "d", "f")]
    );
}

#[test]
fn test_empty_rest_yields_no_vocabulary() {
    for reply in ["訳\n\n", "訳\n\n\n\n", "訳\n\n   \n"] {
        assert!(parse_reply(reply).vocabulary.is_empty());
    }
}

#[test]
fn test_empty_head_yields_fallback() {
    for reply in ["", "\n\n", "   \n\nw|t|e\nw2|t2|e2", " \t "] {
        assert_eq!(parse_reply(reply).translation, NO_TRANSLATION_FALLBACK);
    }
}

#[test]
fn test_parser_is_total() {
    let mut huge = String::from("訳\n\n");
    for i in 0..10_000 {
        huge.push_str(if i % 3 == 0 { "|||\n" } else { "x|y|z\n" });
    }

    for reply in [
        String::new(),
        "|".repeat(1000),
        "\n".repeat(1000),
        "|\n\n|\n|".to_string(),
        "\u{0}\u{feff}|\u{200b}|\n\n||".to_string(),
        huge,
    ] {
        let parsed = parse_reply(&reply);
        assert!(!parsed.translation.is_empty());
    }
}

#[test]
fn test_csv_export_has_header_plus_one_line_per_row() {
    let parsed = parse_reply(
        "彼は本を読みます。\n\n\
         Vocabulary | Translation | Example Sentence Using the Word\n\
         book | 本 | 本を読みます。\n\
         read, peruse | 読む | \"読む\"は動詞です。\n\
         he | 彼 | 彼は学生です。",
    );
    assert_eq!(parsed.vocabulary.len(), 3);

    let csv = to_csv_string(&parsed.vocabulary).unwrap();
    assert_eq!(csv.lines().count(), parsed.vocabulary.len() + 1);
    assert_eq!(
        csv.lines().next().unwrap(),
        "Vocabulary,Translation,Example Sentence Using the Word"
    );

    let (headers, rows) = read_csv(&csv);
    assert_eq!(headers, CSV_HEADERS);
    assert_eq!(rows, parsed.vocabulary);
}

#[test]
fn test_csv_export_of_empty_vocabulary() {
    let csv = to_csv_string(&[]).unwrap();
    let (headers, rows) = read_csv(&csv);

    assert_eq!(csv.lines().count(), 1);
    assert_eq!(headers, CSV_HEADERS);
    assert!(rows.is_empty());
}
