//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `PLEASING_LOG=debug`)
pub const LOG_ENV: &str = "PLEASING_LOG";

/// Initialize the tracing subscriber, writing to stderr.
///
/// Respects `PLEASING_LOG` when set. Otherwise defaults to `warn`, or to
/// `debug` for this crate when `verbose` is set. Calling it twice is a no-op.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "pleasing=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
