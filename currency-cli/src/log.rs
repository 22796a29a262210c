use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Tracing output is off by default so it never interleaves with the
/// interactive prompts; `--verbose` or `RUST_LOG` opt in.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().without_time())
        .with(filter)
        .init();
}
