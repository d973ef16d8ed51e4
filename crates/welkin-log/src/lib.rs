//! Structured logging for the Welkin sky pipeline.
//!
//! Console output with uptime timestamps and module paths via the `tracing`
//! ecosystem, filterable through `RUST_LOG` or the config's log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use welkin_config::WelkinConfig;

/// Initialize the tracing subscriber.
///
/// Filtering precedence: `RUST_LOG` if set, otherwise the config's
/// `debug.log_level`, otherwise `info`.
pub fn init_logging(config: Option<&WelkinConfig>) {
    let filter_str = config
        .map(|c| c.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or("info")
        .to_string();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}
