//! Tracing setup: structured logging with span definitions and event functions.

pub mod events;
pub mod spans;

use newsrank_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Respects the `NEWSRANK_LOG` environment variable for filtering and falls back
/// to `config.log_level`. Returns without touching the global subscriber when
/// one is already installed.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("NEWSRANK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    let result = if config.json_logs {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
