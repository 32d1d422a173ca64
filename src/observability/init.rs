//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Builds an [`EnvFilter`] from, in order of precedence:
/// 1. The `RUST_LOG` environment variable, if set
/// 2. `config.trace_level`, if set (applied to this crate only)
/// 3. The default: `info`
///
/// # Initialization Behavior
///
/// - Idempotent: only the first call installs a subscriber; later calls (and
///   calls racing an already-installed subscriber, as in test runs) are
///   silently ignored
/// - Never fails: observability is optional
///
/// # Example
///
/// ```
/// use trailshare::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::new(format!("trailshare={level}"))
    });

    let result = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
