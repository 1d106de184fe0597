mod commands;
mod config;
mod environment;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::error::CliError;

const LOG_ENV_VAR: &str = "PAIRING_CHECK_LOG";

#[derive(Parser)]
#[command(name = "pairing-check")]
#[command(version)]
#[command(about = "Keep ate_tests and otg_tests changes paired in pull requests", long_about = None)]
struct Cli {
    /// Only report through the exit status
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    match cli.command.execute(cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !(cli.quiet && e.is_policy_violation()) {
                print_error(&e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
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
