//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; user-facing output (status
//! lines, response bodies) is printed directly and never passes through here.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "MEALIE_API_LOG";

/// Default filter: warnings and errors only
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the filter: `--debug` wins, then `MEALIE_API_LOG`, then the default
pub fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new("mealie_api=debug,warn");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Does nothing if one is already installed.
pub fn init(format: LogFormat, debug: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(debug);

    match format {
        LogFormat::Json => builder.json().try_init().ok(),
        LogFormat::Text => builder.try_init().ok(),
    };
}
