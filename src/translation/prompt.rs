/// Instruction sent with every request. `{source_text}` marks where the
/// user's English text is embedded.
pub const INSTRUCTION_TEMPLATE: &str = "Translate the following English text to Japanese:\n\n\
     {source_text}\n\n\
     Then identify interesting vocabulary from the Japanese translation. \
     First, provide the full Japanese translation as plain text. \
     Then, provide the vocabulary as a table in the following format:\n\n\
     Vocabulary | Translation | Example Sentence Using the Word\n\n\
     Separate each column with a '|' character and use new lines for each vocabulary entry.";

const SOURCE_PLACEHOLDER: &str = "{source_text}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(instruction_text: &str, source_text: &str) -> String {
    // {source_text} is a placeholder for string replacement, not a format argument
    instruction_text.replacen(SOURCE_PLACEHOLDER, source_text, 1)
}
