//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Builds the filter: `RUST_LOG` wins, then `trace_level`, then `info`.
fn filter(config: &Config) -> EnvFilter {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("profile_deck={level}")))
}

/// Installs the global tracing subscriber writing to the plugin log file.
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if that fails (logging is optional)
/// - Idempotent: only the first call takes effect
///
/// # Example
///
/// ```rust,no_run
/// use profile_deck::observability::init_tracing;
/// use profile_deck::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(FileWriter::new(paths::log_file())))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(filter(config))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_uses_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = Config {
            trace_level: Some("debug".into()),
            ..Config::default()
        };
        assert_eq!(filter(&config).to_string(), "profile_deck=debug");
        assert_eq!(filter(&Config::default()).to_string(), "profile_deck=info");
    }
}
