//! Log sink setup
//!
//! Library code logs through the `log` macros only; the binary installs an
//! `env_logger` sink once per run with [`init`].

use crate::types::OperationsError;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Where and how much to log
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    /// Most verbose level recorded; `RUST_LOG` takes precedence
    pub level: LevelFilter,

    /// Log file, truncated at startup; stderr when `None`
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            file: None,
        }
    }
}

impl LogSettings {
    /// Level for a `-v` count: warn, info, debug, then trace
    pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Flushes the installed logger when dropped
#[must_use = "the logger is flushed when the guard is dropped"]
pub struct LogGuard {
    _private: (),
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        log::logger().flush();
    }
}

/// Install the global logger
///
/// # Returns
///
/// * `Ok(LogGuard)` - keep it alive for the whole run
/// * `Err(OperationsError::Logging)` - the log file could not be created or a
///   logger is already installed
pub fn init(settings: &LogSettings) -> Result<LogGuard, OperationsError> {
    let mut builder = Builder::new();
    builder.filter_level(settings.level);
    builder.parse_env("RUST_LOG");

    if let Some(path) = &settings.file {
        let file = File::create(path).map_err(|e| OperationsError::Logging {
            message: format!("{}: {}", path.display(), e),
        })?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                buf.timestamp_millis(),
                record.target(),
                record.level(),
                record.args()
            )
        });
    }

    builder.try_init().map_err(|e| OperationsError::Logging {
        message: e.to_string(),
    })?;

    Ok(LogGuard { _private: () })
}
