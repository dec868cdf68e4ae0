#![forbid(unsafe_code)]

mod endpoint;
mod error;
mod get_record;
mod identify;
mod list_identifiers;
mod logging;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, level_filters::LevelFilter};

use crate::error::Error;

#[derive(Debug, Parser)]
#[command(name = "oai", version)]
#[command(about = "OAI-PMH command line client")]
struct Cli {
    /// Diagnostics written to stderr: off, error, warn, info, debug, or trace.
    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    log_level: LevelFilter,

    /// Print the request URL instead of sending the request.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Get a single record from the repository.
    #[command(name = "GetRecord", visible_alias = "get")]
    GetRecord(get_record::Args),
    /// Retrieve information about a repository.
    #[command(name = "Identify", visible_alias = "id")]
    Identify(identify::Args),
    /// Retrieve the identifiers from a repository.
    #[command(name = "ListIdentifiers", visible_alias = "ls")]
    ListIdentifiers(list_identifiers::Args),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    // One request per invocation; nothing runs concurrently.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;

    runtime.block_on(async move {
        match cli.command {
            Command::GetRecord(args) => get_record::run(args, cli.dry_run).await,
            Command::Identify(args) => identify::run(args, cli.dry_run).await,
            Command::ListIdentifiers(args) => list_identifiers::run(args, cli.dry_run).await,
        }
    })
}
