use log::LevelFilter;

use crate::config::{log_level, LoggingSettings};

/// Installs `env_logger` for a demo driver.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless:
/// the second logger is simply not installed.
pub fn init(settings: &LoggingSettings) {
    let level = log_level(&settings.level).unwrap_or(LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
