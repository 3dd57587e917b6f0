//! Source text input from the command line, files, and stdin.

mod reader;

pub use reader::{InputReader, InputSource, MAX_INPUT_SIZE};
