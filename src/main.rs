use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use command::*;

mod command;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Log at debug level unless RUST_LOG says otherwise
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the method -> paths mapping of an OpenAPI file as JSON
    Extract(Extract),
    /// Print endpoint counts per method without writing anything
    Stats(Stats),
}

/// `RUST_LOG` wins when set; otherwise `--verbose` means debug, else errors only.
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("error"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = log_filter(cli.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match cli.command {
        Command::Extract(e) => e.run(),
        Command::Stats(s) => s.run(),
    }
}
