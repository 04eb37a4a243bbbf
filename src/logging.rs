//! Diagnostic logging setup
//!
//! Log events go to stderr so they never mix with command output. The filter
//! is read from `SATCHEL_LOG` using `tracing_subscriber` directive syntax
//! (`satchel=trace`, `debug`, ...).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SATCHEL_LOG";

/// Filter directive used when `SATCHEL_LOG` is unset
///
/// Build warnings are printed by the commands themselves, so the quiet
/// default only lets errors through.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "error" }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
