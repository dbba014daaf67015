//! Minimal `log` backend writing to stderr.

use crate::config::HoughConfig;
use anyhow::{anyhow, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::str::FromStr;

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger with the given level (`off`, `error`, `warn`,
/// `info`, `debug`, `trace`; case-insensitive).
///
/// Calling this again only changes the level. If another logger was
/// installed first, it stays in place.
pub fn init_with_level(level: &str) -> Result<LevelFilter> {
    let filter =
        LevelFilter::from_str(level).map_err(|_| anyhow!("invalid log level '{level}'"))?;
    // Err only means some logger is already registered.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
    Ok(filter)
}

/// Install the logger from `cfg.log_level`, defaulting to `info`.
pub fn init_from_config(cfg: &HoughConfig) -> Result<LevelFilter> {
    init_with_level(cfg.log_level.as_deref().unwrap_or("info"))
}
