use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// `[<rfc3339 time> - <LEVEL>] <message> [<file>:<line>]`
pub(crate) struct LogLine<'a, L> {
    pub timestamp: SystemTime,
    pub level: L,
    pub message: &'a dyn fmt::Display,
    pub file: Option<&'a str>,
    pub line: Option<u32>,
}

impl<L: fmt::Display> fmt::Display for LogLine<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} - {}] {} [{}:{}]",
            humantime::format_rfc3339(self.timestamp),
            self.level,
            self.message,
            self.file.unwrap_or("unknown"),
            self.line.unwrap_or(0),
        )
    }
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_log_file(path: &Path) -> ServerErrorResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ServerError::logger(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })
}

/// Install the global fern logger.
///
/// Logs go to `log_file` when set, stdout otherwise. `colored` only applies
/// to stdout.
#[track_caller]
pub fn initialize(
    log_level: sr_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let colors = (colored && log_file.is_none()).then(level_colors);

    let output: fern::Output = match &log_file {
        Some(path) => open_log_file(path)?.into(),
        None => std::io::stdout().into(),
    };

    Dispatch::new()
        .format(move |out, message, record| match colors {
            Some(colors) => out.finish(format_args!(
                "{}",
                LogLine {
                    timestamp: SystemTime::now(),
                    level: colors.color(record.level()),
                    message,
                    file: record.file(),
                    line: record.line(),
                }
            )),
            None => out.finish(format_args!(
                "{}",
                LogLine {
                    timestamp: SystemTime::now(),
                    level: record.level(),
                    message,
                    file: record.file(),
                    line: record.line(),
                }
            )),
        })
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", level_filter.min(LevelFilter::Warn))
        .chain(output)
        .apply()
        .map_err(|e| ServerError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}
