mod commands;
mod config;
mod error;
mod report;
mod repos;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "spec-bump")]
#[command(bin_name = "spec-bump")]
#[command(about = "Bump package versions across repository checkouts", long_about = None)]
struct Cli {
    /// Directory holding the repository checkouts (default: current directory)
    #[arg(long = "checkouts", short = 'C', global = true, value_name = "DIR")]
    checkouts: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let checkouts = match cli.checkouts {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("error: cannot determine current directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    if let Err(e) = cli.command.execute(&checkouts) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
