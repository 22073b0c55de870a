//! Logging initialization

use crate::config::LoggingConfig;
use log::LevelFilter;

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// The configured level is the default; `RUST_LOG` overrides it. Unknown
/// level names fall back to `info`. Calling this twice is harmless.
pub fn init(config: &LoggingConfig) {
    let parsed = parse_level(&config.level);
    let level = *parsed.as_ref().unwrap_or(&LevelFilter::Info);

    let initialized = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .is_ok();

    if initialized {
        if parsed.is_err() {
            log::warn!("Unknown log level {:?}, using info", config.level);
        }
        log::debug!("Logging initialized at {level}");
    }
}

fn parse_level(name: &str) -> Result<LevelFilter, log::ParseLevelError> {
    name.parse()
}
