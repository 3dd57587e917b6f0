use serde::Serialize;

/// One extracted vocabulary entry.
///
/// Rows carry no identity beyond their position in [`ParsedResult::vocabulary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VocabRow {
    /// The Japanese word as shown in the "Vocabulary" column.
    pub word: String,
    /// Shown in the "Translation" column.
    pub translation_of_word: String,
    /// Shown in the "Example Sentence Using the Word" column.
    pub example_sentence: String,
}

impl VocabRow {
    pub fn new(
        word: impl Into<String>,
        translation_of_word: impl Into<String>,
        example_sentence: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            translation_of_word: translation_of_word.into(),
            example_sentence: example_sentence.into(),
        }
    }

    /// Cells in export column order: Vocabulary, Translation, Example.
    pub fn as_record(&self) -> [&str; 3] {
        [
            self.word.as_str(),
            self.translation_of_word.as_str(),
            self.example_sentence.as_str(),
        ]
    }
}

/// The structured form of one completion reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedResult {
    /// Never empty: falls back to a placeholder when the reply had no translation.
    pub translation: String,
    /// Empty means nothing was extracted, which is not a failure.
    pub vocabulary: Vec<VocabRow>,
}

impl ParsedResult {
    pub const fn has_vocabulary(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}
