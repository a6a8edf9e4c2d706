//! Logging setup for the storefront binary
//!
//! `RUST_LOG` wins when set. Otherwise the configured level applies to the
//! storefront and `shared` crates while dependencies (redb, tokio) stay at
//! `warn`.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Daily files are named `storefront.YYYY-MM-DD`
const LOG_FILE_PREFIX: &str = "storefront";

/// Filter directives for a level name; unknown names fall back to `info`
fn default_directives(level: &str) -> String {
    let level = level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO)
        .as_str()
        .to_ascii_lowercase();
    format!("warn,storefront={level},shared={level}")
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Stdout logging at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Install the global subscriber
///
/// With an existing `log_dir`, output goes to daily rolling files there
/// instead of stdout. Only the first call in a process installs anything.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level.unwrap_or("info")))
        .with_target(false);

    let installed = match log_dir.map(Path::new) {
        Some(dir) if dir.is_dir() => builder
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        _ => builder.try_init(),
    };
    if installed.is_err() {
        tracing::debug!("Logger already installed, keeping the first one");
    }
}
