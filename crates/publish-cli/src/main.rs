//! Agent Publisher CLI
//!
//! Publishes agent documentation and signed manifests to IPFS.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Publish {
            config,
            image,
            private_key,
            ipfs_url,
            dry_run,
        } => {
            if dry_run {
                commands::run_publish_dry_run(&config, &image, &private_key)
            } else {
                commands::run_publish(&config, &image, &private_key, &ipfs_url)
            }
        }
        Commands::Manifest {
            config,
            image,
            private_key,
        } => commands::run_manifest(&config, &image, &private_key),
        Commands::Verify {
            file,
            reference,
            ipfs_url,
        } => match (file, reference) {
            (Some(file), _) => commands::run_verify_file(&file),
            (None, Some(reference)) => commands::run_verify_ref(&reference, &ipfs_url),
            (None, None) => Err(error::CliError::user(
                "verify needs an envelope file or --ref",
            )),
        },
    }
}
