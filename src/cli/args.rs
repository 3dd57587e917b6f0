use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "azu")]
#[command(about = "English-to-Japanese translation with vocabulary extraction")]
#[command(version)]
pub struct Args {
    /// File with English text to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// English text to translate, instead of FILE or stdin
    #[arg(short = 't', long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API key (overrides the config file and environment)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Export the vocabulary table to vocabulary_extraction.csv
    #[arg(short = 'e', long)]
    pub export: bool,

    /// Export the vocabulary table to the given CSV file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the parsed result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print request diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session: translate one entry at a time
    Chat {
        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// API key (asked for interactively when missing)
        #[arg(short = 'k', long)]
        api_key: Option<String>,
    },
    /// Choose the default model
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
