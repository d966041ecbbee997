/// Core logging implementation with automatic filtering
///
/// Each message is checked independently against the console and file
/// thresholds, then handed to the format module.
use super::config::{get_logger_config, is_debug_enabled_for_tag, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a message passes a sink's minimum level
///
/// Filtering rules:
/// 1. Errors always pass
/// 2. Debug passes when the sink threshold allows it, or when --debug-<tag> is set
/// 3. Everything else is compared against the threshold
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel, min_level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level == LogLevel::Debug && is_debug_enabled_for_tag(config, tag) {
        return true;
    }

    level <= min_level
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();

    let to_console = !config.quiet && should_log(&config, &tag, level, config.console_min_level);
    let to_file = should_log(&config, &tag, level, config.file_min_level);

    if to_console {
        super::format::print_console(tag, level, message);
    }
    if to_file {
        super::file::write_to_file(&super::format::file_line(tag, level, message));
    }
}
