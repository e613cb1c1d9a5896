use anyhow::Result;
use clap::Parser;

use aide_cli::cli::commands::{ask, chat, configure, page};
use aide_cli::cli::{Args, Command};
use aide_cli::i18n::print_languages;
use aide_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    aide_cli::logging::init();

    let options = args.resolve_options();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat) => {
            chat::run_chat(&options).await?;
        }
        Some(Command::Ask { message }) => {
            ask::run_ask(&message, &options).await?;
        }
        Some(Command::Page { section }) => {
            page::run_page(section, &options)?;
        }
        None => {
            page::run_page(None, &options)?;
        }
    }

    Ok(())
}
