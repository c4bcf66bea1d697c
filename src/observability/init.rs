//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when the configuration names none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Idempotent: only the first call takes effect. An unparsable level falls
/// back to [`DEFAULT_TRACE_LEVEL`].
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true),
    );

    let _ = subscriber.try_init();
}
