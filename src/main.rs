//! Roam Backup Dedup - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use roam_backup_dedup::{
    cli::Args,
    dedupe_backups,
    error::{exit_codes, Result},
    output::{print_error, print_summary},
    Config,
};

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;
    let stats = dedupe_backups(&config)?;
    print_summary(&stats);
    Ok(())
}
