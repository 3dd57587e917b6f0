//! Vocabulary table extraction from free-form completion replies.

mod export;
mod model;
mod parser;
mod render;

pub use export::{CSV_HEADERS, DEFAULT_EXPORT_FILE, export_csv, to_csv_string};
pub use model::{ParsedResult, VocabRow};
pub use parser::{NO_TRANSLATION_FALLBACK, parse_reply};
pub use render::{NO_VOCABULARY_WARNING, print_result, render_result};
