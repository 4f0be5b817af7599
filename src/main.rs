//! autofetch - idempotent auto-fetch of declared container images
//!
//! Reads the resources a deployment unit declares in its metadata, fetches
//! every docker resource marked `auto-fetch` once per lifecycle, and serves
//! fetch requests raised by later events.

use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod common;
mod config;
mod dispatch;
mod error;
mod fetch;
mod logging;
mod manifest;
mod reconcile;
mod state;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::Settings;
use error::Result;

fn resolve_settings(
    cli_manifest: Option<PathBuf>,
    cli_state_dir: Option<PathBuf>,
) -> Result<Settings> {
    let settings = Settings::resolve(cli_manifest, cli_state_dir)?;
    tracing::debug!(
        manifest = %settings.manifest_path.display(),
        state_dir = %settings.state_dir.display(),
        "resolved settings"
    );
    Ok(settings)
}

fn execute(cli: Cli) -> Result<()> {
    let Cli {
        manifest,
        state_dir,
        command,
        ..
    } = cli;
    let settings = move || resolve_settings(manifest, state_dir);

    match command {
        Commands::Run => commands::run::run(&settings()?),
        Commands::Request(args) => commands::request::run(&settings()?, args),
        Commands::Status => commands::status::run(&settings()?),
        Commands::List(args) => commands::list::run(&settings()?, &args),
        Commands::Show(args) => commands::show::run(&settings()?, &args),
        Commands::Reset(args) => commands::reset::run(&settings()?, &args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        tracing::debug!(category = ?e.category(), "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
