//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`; command output stays on
//! stdout. The filter comes from `AUTOFETCH_LOG` (`EnvFilter` syntax) when
//! set, otherwise `warn`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "AUTOFETCH_LOG";

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialize the global tracing subscriber
///
/// Call once at startup before any tracing events are emitted.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    // A subscriber may already be set in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
