//! Structured logging infrastructure for Chatsense.
//!
//! This module configures a `tracing` subscriber from [`LoggingConfig`],
//! supporting pretty, compact and JSON output to stdout or a file.

#[cfg(test)]
mod tests;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

/// Keeps the file writer's worker alive for the lifetime of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// Calling this more than once is harmless: if a global subscriber is already
/// installed the call returns `Ok(())`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let level = log_level_to_level(&config.level);

    let result = match (&config.file, config.stdout) {
        (Some(path), false) => {
            let (writer, guard) = create_non_blocking_file(path)?;
            let result = install(level, &config.format, writer);
            if result.is_ok() {
                let _ = FILE_GUARD.set(guard);
            }
            result
        }
        (Some(_), true) => {
            let result = install(level, &config.format, std::io::stdout);
            tracing::warn!("Configured for stdout; file logging ignored");
            result
        }
        (None, true) => install(level, &config.format, std::io::stdout),
        (None, false) => Ok(()),
    };

    // Another thread may have won the race to install a subscriber
    if result.is_err() && tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    result
}

/// Install a fmt subscriber in the requested format.
fn install<W>(level: Level, format: &LogFormat, writer: W) -> Result<()>
where
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_level(true)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(writer);

    match format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Compact => builder.compact().try_init()?,
        LogFormat::Pretty => builder.pretty().try_init()?,
        LogFormat::Default => builder.try_init()?,
    }

    Ok(())
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<(NonBlocking, WorkerGuard)> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    Ok(tracing_appender::non_blocking(file_appender))
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level.parse::<LogLevel>().map_err(LogError::InvalidLogLevel)
}

/// Convert a LogLevel into the matching tracing::Level.
pub fn log_level_to_level(level: &LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    if level == Level::TRACE {
        LogLevel::Trace
    } else if level == Level::DEBUG {
        LogLevel::Debug
    } else if level == Level::INFO {
        LogLevel::Info
    } else if level == Level::WARN {
        LogLevel::Warn
    } else {
        LogLevel::Error
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
        }
    }
}

impl std::error::Error for LogError {}
