//! Logging setup for akaructl
//!
//! Log lines go to stderr so they never interleave with chat replies.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter (e.g. `akaru_shared=debug`)
pub const LOG_ENV: &str = "AKARU_LOG";

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
