/// Default endpoints and tuning values
///
/// Everything here can be overridden through the TOML config or CLI flags.

// ============================================================================
// ENDPOINTS
// ============================================================================

pub const SUI_RPC_URL: &str = "https://fullnode.mainnet.sui.io:443";
pub const COINGECKO_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const PROXY_CHECK_URL: &str = "https://api.ipify.org";

// ============================================================================
// FILES
// ============================================================================

pub const DEFAULT_WALLETS_FILE: &str = "wallets.txt";
pub const DEFAULT_TOKENS_FILE: &str = "tokens.txt";
pub const DEFAULT_PROXIES_FILE: &str = "proxies.txt";
pub const DEFAULT_LOG_FILE: &str = "sui_checker.log";
pub const DEFAULT_CONFIG_FILE: &str = "sui_checker.toml";

// ============================================================================
// TIMEOUTS AND RETRIES
// ============================================================================

pub const RPC_TIMEOUT_SECS: u64 = 10;
pub const PRICE_TIMEOUT_SECS: u64 = 5;
pub const PROXY_CHECK_TIMEOUT_SECS: u64 = 5;
pub const MAX_RETRIES: u32 = 3;
pub const RETRY_DELAY_SECS: u64 = 2;
/// CoinGecko free tier resets its window after a minute
pub const RATE_LIMIT_BACKOFF_SECS: u64 = 60;

// ============================================================================
// CHAIN
// ============================================================================

/// Coin type of native SUI
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";
pub const SUI_SYMBOL: &str = "SUI";
/// 1 SUI = 10^9 MIST
pub const SUI_DECIMALS: u8 = 9;
/// Used when coin metadata cannot be fetched
pub const DEFAULT_TOKEN_DECIMALS: u8 = 9;

/// Liquid staking tokens counted towards the SUI total
pub const AFSUI_SYMBOL: &str = "AFSUI";
pub const VSUI_SYMBOL: &str = "CERT";

// ============================================================================
// DISPLAY
// ============================================================================

/// Tokens worth less than this across all wallets get no column
pub const MIN_TOKEN_VALUE_USD: f64 = 0.05;
pub const ADDRESS_PREFIX_LEN: usize = 5;
pub const ADDRESS_SUFFIX_LEN: usize = 3;
pub const TABLE_RULE_WIDTH: usize = 120;
pub const ADDRESS_COLUMN_WIDTH: usize = 20;
pub const VALUE_COLUMN_WIDTH: usize = 25;
