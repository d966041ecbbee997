/// Command-line arguments
///
/// Flags override values from the TOML config, which override the defaults.
use crate::config::{load_config_from_path, validate_config, Config};
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::errors::CheckerResult;
use crate::logger::{LogLevel, LogTag, LoggerConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sui_checker")]
#[command(version, about = "Check Sui wallet balances, staking and token values", long_about = None)]
pub struct Cli {
    /// TOML config file (default: sui_checker.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Wallet addresses, one per line
    #[arg(long, value_name = "FILE")]
    pub wallets: Option<PathBuf>,

    /// Coin types, one per line
    #[arg(long, value_name = "FILE")]
    pub tokens: Option<PathBuf>,

    /// Proxies, one per line (host:port:user:pass, host:port or URL)
    #[arg(long, value_name = "FILE")]
    pub proxies: Option<PathBuf>,

    /// Log file for proxy health and request failures
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sui JSON-RPC endpoint
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Ignore the proxies file and connect directly
    #[arg(long)]
    pub no_proxies: bool,

    /// Hide progress bars and status lines
    #[arg(long)]
    pub no_progress: bool,

    /// No log output on the console
    #[arg(short, long)]
    pub quiet: bool,

    /// Log everything on every sink
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long)]
    pub debug_proxy: bool,

    #[arg(long)]
    pub debug_rpc: bool,

    #[arg(long)]
    pub debug_prices: bool,

    #[arg(long)]
    pub debug_wallet: bool,
}

impl Cli {
    /// Config path and whether it must exist
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }

    /// Apply flag overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut Config) {
        let path_string = |p: &PathBuf| p.to_string_lossy().into_owned();

        if let Some(path) = &self.wallets {
            config.files.wallets = path_string(path);
        }
        if let Some(path) = &self.tokens {
            config.files.tokens = path_string(path);
        }
        if let Some(path) = &self.proxies {
            config.files.proxies = path_string(path);
        }
        if let Some(path) = &self.log_file {
            config.files.log_file = path_string(path);
        }
        if let Some(url) = &self.rpc_url {
            config.rpc.url = url.clone();
        }
        if self.no_proxies {
            config.proxy.enabled = false;
        }
    }

    /// Load the config file, apply the flags and validate the result
    pub fn resolve_config(&self) -> CheckerResult<Config> {
        let (path, required) = self.config_path();
        let mut config = load_config_from_path(&path, required)?;
        self.apply_to(&mut config);
        validate_config(&config)?;
        Ok(config)
    }

    /// Tags with --debug-<tag> set
    pub fn debug_tags(&self) -> Vec<LogTag> {
        [
            (self.debug_proxy, LogTag::Proxy),
            (self.debug_rpc, LogTag::Rpc),
            (self.debug_prices, LogTag::Prices),
            (self.debug_wallet, LogTag::Wallet),
        ]
        .into_iter()
        .filter_map(|(enabled, tag)| enabled.then_some(tag))
        .collect()
    }

    pub fn logger_config(&self, config: &Config) -> LoggerConfig {
        let mut logger = LoggerConfig {
            console_min_level: LogLevel::parse(&config.logging.console_level)
                .unwrap_or(LogLevel::Warning),
            file_min_level: LogLevel::parse(&config.logging.file_level).unwrap_or(LogLevel::Info),
            quiet: self.quiet,
            log_file: Some(PathBuf::from(&config.files.log_file)),
            ..LoggerConfig::default()
        };
        if self.verbose {
            logger = logger.verbose();
        }
        for tag in self.debug_tags() {
            logger = logger.with_debug_tag(tag);
        }
        logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sui_checker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.config_path(), (PathBuf::from("sui_checker.toml"), false));
        assert!(cli.debug_tags().is_empty());

        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&[
            "--config",
            "custom.toml",
            "--wallets",
            "w.txt",
            "--rpc-url",
            "https://rpc.example",
            "--no-proxies",
            "--debug-rpc",
        ]);
        assert_eq!(cli.config_path(), (PathBuf::from("custom.toml"), true));

        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.files.wallets, "w.txt");
        assert_eq!(config.rpc.url, "https://rpc.example");
        assert!(!config.proxy.enabled);
        assert_eq!(cli.debug_tags(), vec![LogTag::Rpc]);
    }

    #[test]
    fn test_logger_config() {
        let cli = parse(&["--verbose", "--log-file", "out.log"]);
        let mut config = Config::default();
        cli.apply_to(&mut config);
        let logger = cli.logger_config(&config);

        assert_eq!(logger.console_min_level, LogLevel::Verbose);
        assert_eq!(logger.log_file, Some(PathBuf::from("out.log")));
        assert!(!logger.quiet);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["sui_checker", "--debug-everything"]).is_err());
    }

    #[test]
    fn test_resolve_config_validates_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sui_checker.toml");
        std::fs::write(&path, "[display]\nmin_token_value = 1.0\n").unwrap();
        let config_arg = path.to_string_lossy().into_owned();
        let config_arg = config_arg.as_str();

        let config = parse(&["--config", config_arg]).resolve_config().unwrap();
        assert_eq!(config.display.min_token_value, 1.0);

        let bad = parse(&["--config", config_arg, "--rpc-url", "not a url"]);
        let err = bad.resolve_config().unwrap_err();
        assert!(err.to_string().contains("rpc.url"));
    }
}
