//! Structured logging to stderr.
//!
//! Stdout is reserved for `--show` and `--json` output.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. `--log-level`, lowered to `info` by `--verbose`
/// 2. `OHM_NAMES_LOG_LEVEL`
/// 3. `warn`
///
/// A subscriber that is already installed is kept.
pub fn init_logging(config: &CliConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    // The first subscriber wins, which is what tests rely on.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
