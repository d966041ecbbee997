/// Configuration schemas - all config structures defined once with defaults
///
/// Each struct is defined using the config_struct! macro, so a TOML file
/// only needs the fields it wants to change.
use crate::constants::*;
use std::collections::BTreeMap;

// ============================================================================
// INPUT / OUTPUT FILES
// ============================================================================

config_struct! {
    /// Locations of the line-based input files and the log file
    pub struct FilesConfig {
        wallets: String = DEFAULT_WALLETS_FILE.to_string(),
        tokens: String = DEFAULT_TOKENS_FILE.to_string(),
        proxies: String = DEFAULT_PROXIES_FILE.to_string(),
        log_file: String = DEFAULT_LOG_FILE.to_string(),
    }
}

// ============================================================================
// NETWORK
// ============================================================================

config_struct! {
    /// Sui JSON-RPC endpoint
    pub struct RpcConfig {
        url: String = SUI_RPC_URL.to_string(),
        timeout_secs: u64 = RPC_TIMEOUT_SECS,
    }
}

config_struct! {
    /// CoinGecko simple price API
    pub struct PricesConfig {
        api_url: String = COINGECKO_PRICE_URL.to_string(),
        timeout_secs: u64 = PRICE_TIMEOUT_SECS,
        /// Extra or overriding symbol -> CoinGecko id entries
        coin_ids: BTreeMap<String, String> = BTreeMap::new(),
    }
}

config_struct! {
    /// Proxy health check
    pub struct ProxyConfig {
        enabled: bool = true,
        check_url: String = PROXY_CHECK_URL.to_string(),
        check_timeout_secs: u64 = PROXY_CHECK_TIMEOUT_SECS,
    }
}

config_struct! {
    /// Per-request retry policy
    pub struct RetryConfig {
        max_attempts: u32 = MAX_RETRIES,
        delay_secs: u64 = RETRY_DELAY_SECS,
        rate_limit_backoff_secs: u64 = RATE_LIMIT_BACKOFF_SECS,
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

config_struct! {
    /// Table rendering
    pub struct DisplayConfig {
        min_token_value: f64 = MIN_TOKEN_VALUE_USD,
        address_prefix: usize = ADDRESS_PREFIX_LEN,
        address_suffix: usize = ADDRESS_SUFFIX_LEN,
    }
}

config_struct! {
    /// Logger thresholds
    pub struct LoggingConfig {
        console_level: String = "warning".to_string(),
        file_level: String = "info".to_string(),
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    /// Complete checker configuration
    pub struct Config {
        files: FilesConfig = FilesConfig::default(),
        rpc: RpcConfig = RpcConfig::default(),
        prices: PricesConfig = PricesConfig::default(),
        proxy: ProxyConfig = ProxyConfig::default(),
        retry: RetryConfig = RetryConfig::default(),
        display: DisplayConfig = DisplayConfig::default(),
        logging: LoggingConfig = LoggingConfig::default(),
    }
}
