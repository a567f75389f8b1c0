//! Logging for the scanner and its CLI host
//!
//! Modeline handling never fails loudly, so the logs are where skipped
//! tokens, found modelines and reload problems show up:
//!
//! - `RUST_LOG=modeline=debug` prints every directive applied and every
//!   token skipped along with its reason
//! - without `RUST_LOG`, only warnings (failed reloads, unreadable config)
//!   reach stderr
//!
//! A debug-level copy is always written to `logs/modeline.log.<date>` in the
//! config directory.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "modeline.log";

/// Install the stderr and rolling-file subscribers
pub fn init() {
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Scan results go to stdout, so diagnostics stay on stderr
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(stderr_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|logs_dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_line_number(true)
                .with_filter(EnvFilter::new("modeline=debug"))
        });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
}
