//! Console logging bootstrap using the tracing ecosystem.
//!
//! Environment-aware, console-only setup for containerized deployments:
//! logs go to stdout, `RUST_LOG` wins over the configured default level,
//! ANSI colors are enabled only on a TTY, and JSON output can be switched
//! on for log shippers via [`LoggingConfig::json_output`].
//!
//! Initialization is idempotent; only the first call installs a
//! subscriber.

use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

static INIT: OnceLock<bool> = OnceLock::new();

/// Install the global tracing subscriber from the given settings.
///
/// Returns `true` if this call installed the subscriber, `false` if one
/// was already in place (from an earlier call or from the host
/// application).
pub fn init_logging(config: &LoggingConfig) -> bool {
    *INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

        if config.json_output {
            let layer = fmt::layer().json().with_target(true).with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .is_ok()
        } else {
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(std::io::stdout().is_terminal());
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .is_ok()
        }
    })
}
