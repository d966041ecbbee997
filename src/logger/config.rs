/// Logger configuration
///
/// Stored in a global so every module can log without carrying a handle.
/// `init` in the parent module installs it once at startup.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level printed on the console
    pub console_min_level: LogLevel,
    /// Minimum level written to the log file
    pub file_min_level: LogLevel,
    /// Disable the console sink entirely
    pub quiet: bool,
    /// Tags whose Debug messages are enabled (keys from `LogTag::to_debug_key`)
    pub enabled_debug_tags: HashSet<String>,
    /// Append-only log file, `None` for console only
    pub log_file: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console_min_level: LogLevel::Warning,
            file_min_level: LogLevel::Info,
            quiet: false,
            enabled_debug_tags: HashSet::new(),
            log_file: Some(PathBuf::from(crate::constants::DEFAULT_LOG_FILE)),
        }
    }
}

impl LoggerConfig {
    /// Raise both sinks to Verbose
    pub fn verbose(mut self) -> Self {
        self.console_min_level = LogLevel::Verbose;
        self.file_min_level = LogLevel::Verbose;
        self
    }

    pub fn with_debug_tag(mut self, tag: LogTag) -> Self {
        self.enabled_debug_tags
            .insert(tag.to_debug_key().to_string());
        self
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the logger configuration
pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

pub fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.enabled_debug_tags.contains(tag.to_debug_key())
}
