//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries nothing but game summaries.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber at `level`.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init_logging(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
