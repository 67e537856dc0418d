use clap::Parser;
use std::path::PathBuf;

mod cli;
mod command;
mod result;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("tagnotes")
        .build();

    // stdout carries the generated notes
    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let repo_path = PathBuf::from(&cli_args.repo_path);

    match cli_args.command {
        cli::Command::Changelog(args) => {
            command::changelog::execute(&repo_path, args).await
        }
        cli::Command::Schema => command::schema::execute(),
    }
}
