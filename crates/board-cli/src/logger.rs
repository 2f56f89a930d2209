use crate::{CliError, CliResult};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Record, info};

/// Initialize logger with fern
///
/// Console output goes to stderr so stdout carries only the JSON result.
/// Every line is `[<rfc3339 seconds> - <level>] <target>: <message>`.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Color the level on stderr (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: board_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter = log_level.0;

    let output: Output = match log_file {
        Some(ref log_path) => open_log_file(log_path)?.into(),
        None => std::io::stderr().into(),
    };

    let dispatch = if colored && log_file.is_none() {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            write_line(out, colors.color(record.level()), message, record)
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            write_line(out, record.level(), message, record)
        })
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch.chain(output))
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

fn write_line(
    out: FormatCallback,
    level: impl fmt::Display,
    message: &fmt::Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "[{date} - {level}] {target}: {message}",
        date = humantime::format_rfc3339_seconds(SystemTime::now()),
        target = record.target(),
    ))
}

#[track_caller]
fn open_log_file(log_path: &Path) -> CliResult<std::fs::File> {
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            CliError::logger(format!(
                "Failed to create log directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| {
            CliError::logger(format!(
                "Failed to open log file {}: {}",
                log_path.display(),
                e
            ))
        })
}
