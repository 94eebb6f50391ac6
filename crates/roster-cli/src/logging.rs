//! Event log setup.
//!
//! Installs `env_logger` once per process, appending to the configured log
//! file. Each line is `<timestamp> - <LEVEL> - <message>`. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use std::{fmt, fs::OpenOptions, io::Write, path::Path};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};
use jiff::Zoned;
use log::Level;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats one event log line.
pub fn format_line(now: &Zoned, level: Level, message: impl fmt::Display) -> String {
    format!("{} - {} - {}", now.strftime(TIMESTAMP_FORMAT), level, message)
}

/// Opens the log file for appending and installs the global logger.
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open event log at {}", log_file.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(&Zoned::now(), record.level(), record.args())
            )
        })
        .try_init()
        .context("Failed to install logger")
}
