//! Binary crate for the `currency` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging initialization
//! - Driving the interactive conversion loop over stdin/stdout

use clap::Parser;

mod cli;
mod log;
mod repl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    log::init(cmd.verbose);
    cmd.run().await
}
