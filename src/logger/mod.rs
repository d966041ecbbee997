//! Structured logging system for sui-checker
//!
//! This module provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via --debug-<tag> flags
//! - Dual output: colored console (stderr) + plain log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sui_checker::logger::{self, LogTag};
//!
//! logger::error(LogTag::Rpc, "Connection failed");
//! logger::warning(LogTag::Proxy, "Proxy did not answer");
//! logger::info(LogTag::Wallet, "Wallet processed");
//! logger::debug(LogTag::Prices, "Raw response: ..."); // Only with --debug-prices
//! ```
//!
//! Call [`init`] once at startup, before any logging occurs. Until then
//! messages go through the default configuration without a file sink.

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use file::FileSink;
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// Installs the configuration and opens the log file. If the file cannot be
/// opened, logging continues on the console and a warning is emitted.
pub fn init(config: LoggerConfig) {
    let log_file = config.log_file.clone();
    set_logger_config(config);

    if let Err(e) = file::init_file_logging(log_file.as_deref()) {
        let path = log_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        warning(
            LogTag::System,
            &format!("Cannot open log file {}: {}. Logging to console only", path, e),
        );
    }
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, shown only when the tag's debug flag is set
/// or a sink runs at Verbose
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Force flush all pending log writes
pub fn flush() {
    file::flush_file_logging();
}
