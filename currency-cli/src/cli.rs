use clap::Parser;
use currency_core::{Config, RateFetcher};
use std::io;
use tracing::debug;

use crate::repl;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "currency", version, about = "CAD to foreign currency converter")]
pub struct Cli {
    /// Rates endpoint URL; overrides the configured default.
    #[arg(long)]
    pub url: Option<String>,

    /// Timeout for the rates request, in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Persist the effective endpoint and timeout to the config file.
    #[arg(long)]
    pub save: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        if let Some(url) = self.url {
            config.endpoint_url = url;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if self.save {
            config.save()?;
        }

        debug!(endpoint = %config.endpoint_url, timeout_secs = config.timeout_secs, "starting converter");

        let fetcher = RateFetcher::new(config.endpoint_url.clone(), config.timeout())?;

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        repl::run_loop(&fetcher, &mut input, &mut out).await
    }
}
