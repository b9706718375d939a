//! Leveled colored console logger
//!
//! User-facing polling output, distinct from the `tracing` diagnostics:
//! one colored, timestamped line per message on stdout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use chrono::Local;
use colored::{ColoredString, Colorize};

const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Severity of a console log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    fn colorize(self, line: String) -> ColoredString {
        match self {
            Self::Debug => line.blue(),
            Self::Info => line.white(),
            Self::Warning => line.yellow(),
            Self::Error => line.red(),
        }
    }
}

/// Process-wide console logger.
///
/// Obtain the shared instance via [`ConsoleLogger::global`]; all methods
/// take `&self`, so the handle can also be passed explicitly. Output is
/// best-effort: a write failure on stdout is not surfaced.
pub struct ConsoleLogger {
    debug_enabled: AtomicBool,
}

impl ConsoleLogger {
    fn new() -> Self {
        Self {
            debug_enabled: AtomicBool::new(false),
        }
    }

    /// Returns the shared logger instance, creating it on first access.
    /// Concurrent first access is safe; only one instance is ever created.
    pub fn global() -> &'static ConsoleLogger {
        static INSTANCE: OnceLock<ConsoleLogger> = OnceLock::new();
        INSTANCE.get_or_init(ConsoleLogger::new)
    }

    /// Enables or disables debug-level output (disabled by default).
    pub fn set_debug(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Logs a debug message (blue). Suppressed unless enabled via
    /// [`ConsoleLogger::set_debug`].
    pub fn debug(&self, message: &str) {
        if self.debug_enabled.load(Ordering::Relaxed) {
            self.log(Level::Debug, message);
        }
    }

    /// Logs an informational message (white).
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Logs a warning message (yellow).
    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    /// Logs an error message (red).
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn log(&self, level: Level, message: &str) {
        println!("{}", Self::render(level, message));
    }

    fn render(level: Level, message: &str) -> ColoredString {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        level.colorize(format!("[{}][{}] {}", level.label(), timestamp, message))
    }
}
