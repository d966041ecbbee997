use super::schemas::Config;
/// Configuration utilities - loading and validation
use crate::errors::{CheckerError, CheckerResult};
use crate::logger::LogLevel;
use std::path::Path;

/// Load configuration from a TOML file
///
/// A missing file yields defaults unless `required` is set (an explicit
/// `--config` path must exist).
pub fn load_config_from_path(path: &Path, required: bool) -> CheckerResult<Config> {
    if !path.exists() {
        if required {
            return Err(CheckerError::Config(format!(
                "Config file '{}' not found",
                path.display()
            )));
        }
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| CheckerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents)
        .map_err(|e| CheckerError::Config(format!("Failed to parse '{}': {}", path.display(), e)))
}

/// Parse and validate configuration text
pub fn parse_config(contents: &str) -> CheckerResult<Config> {
    let config: Config =
        toml::from_str(contents).map_err(|e| CheckerError::Config(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Reject values that would make the run meaningless
pub fn validate_config(config: &Config) -> CheckerResult<()> {
    if config.retry.max_attempts == 0 {
        return Err(CheckerError::Config(
            "retry.max_attempts must be at least 1".to_string(),
        ));
    }

    for (name, value) in [
        ("rpc.url", &config.rpc.url),
        ("prices.api_url", &config.prices.api_url),
        ("proxy.check_url", &config.proxy.check_url),
    ] {
        url::Url::parse(value)
            .map_err(|e| CheckerError::Config(format!("{} '{}' is not a valid URL: {}", name, value, e)))?;
    }

    for (name, value) in [
        ("logging.console_level", &config.logging.console_level),
        ("logging.file_level", &config.logging.file_level),
    ] {
        if LogLevel::parse(value).is_none() {
            return Err(CheckerError::Config(format!(
                "{} '{}' is not a log level",
                name, value
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.rpc.url, "https://fullnode.mainnet.sui.io:443");
        assert_eq!(config.display.min_token_value, 0.05);
        assert_eq!(config.files.log_file, "sui_checker.log");
    }

    #[test]
    fn test_partial_toml() {
        let config = parse_config(
            r#"
            [rpc]
            timeout_secs = 30

            [prices.coin_ids]
            HASUI = "haedal-staked-sui"
            "#,
        )
        .unwrap();

        assert_eq!(config.rpc.timeout_secs, 30);
        assert_eq!(config.rpc.url, Config::default().rpc.url);
        assert_eq!(
            config.prices.coin_ids.get("HASUI").map(String::as_str),
            Some("haedal-staked-sui")
        );
    }

    #[test]
    fn test_validation() {
        assert!(parse_config("[retry]\nmax_attempts = 0").is_err());
        assert!(parse_config("[rpc]\nurl = \"not a url\"").is_err());
        assert!(parse_config("[logging]\nconsole_level = \"loud\"").is_err());
    }

    #[test]
    fn test_config_serialization() {
        let toml_str = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml_str.contains("[files]"));
        assert!(toml_str.contains("[retry]"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert_eq!(load_config_from_path(&path, false).unwrap(), Config::default());
        assert!(load_config_from_path(&path, true).is_err());
    }
}
