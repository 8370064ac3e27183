//! Diagnostic logging for the resource checker
//!
//! This module provides:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for detailed ERROR logs
//!
//! The active logger is owned by `Diagnostics`; the `checker_*!` macros route through it.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to forward checker diagnostics into a host's own
/// console (an editor log window, a file, a test capture buffer).
///
/// # Example
///
/// ```no_run
/// use resource_checker::rescheck::log::{Logger, LogEntry};
///
/// struct HostConsole;
///
/// impl Logger for HostConsole {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "rescheck::Scanner", "rescheck::Checker")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose tracing (per-record decisions)
    Trace,

    /// Development information
    Debug,

    /// Scan lifecycle events
    Info,

    /// Rejected or degraded operations
    Warn,

    /// Faults, with file:line details
    Error,
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! checker_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::rescheck::Diagnostics::log(
            $crate::rescheck::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! checker_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::rescheck::Diagnostics::log(
            $crate::rescheck::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// # Example
///
/// ```no_run
/// # use resource_checker::checker_info;
/// checker_info!("rescheck::Checker", "Scan finished: {} textures", 12);
/// ```
#[macro_export]
macro_rules! checker_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::rescheck::Diagnostics::log(
            $crate::rescheck::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! checker_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::rescheck::Diagnostics::log(
            $crate::rescheck::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! checker_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::rescheck::Diagnostics::log_detailed(
            $crate::rescheck::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

// ===== ERROR MACROS =====

/// Log an ERROR and build an `Error::HostFailure` carrying the same message
///
/// # Example
///
/// ```no_run
/// # use resource_checker::checker_err;
/// let err = checker_err!("rescheck::Snapshot", "persistent scene unavailable");
/// ```
#[macro_export]
macro_rules! checker_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::rescheck::Diagnostics::log_detailed(
            $crate::rescheck::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::rescheck::Error::HostFailure(message)
    }};
}

/// Log an ERROR and return early with `Error::HostFailure`
#[macro_export]
macro_rules! checker_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::checker_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
