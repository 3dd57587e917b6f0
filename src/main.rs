use anyhow::Result;
use clap::Parser;

use azu_cli::cli::commands::{chat, configure, translate};
use azu_cli::cli::{Args, Command, report_error};
use azu_cli::error::exit_code;
use azu_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.verbose));

    if let Err(err) = run(args).await {
        report_error(&err);
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat { model, api_key }) => {
            let options = chat::ChatOptions { model, api_key };
            chat::run_chat(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                text: args.text,
                model: args.model,
                api_key: args.api_key,
                export: translate::TranslateOptions::export_path(args.export, args.output),
                json: args.json,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
