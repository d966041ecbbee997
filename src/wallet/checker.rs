/// Per-wallet processing with proxy failover
use super::types::{TokenHolding, WalletBalances, WalletReport};
use crate::errors::CheckerResult;
use crate::helpers::shorten_address;
use crate::http::Route;
use crate::logger::{self, LogTag};
use crate::pricing::{token_symbol, PriceBook};
use crate::proxy::ProxyPool;
use crate::rpc::{ChainDataProvider, DecimalsTable};

pub struct WalletChecker<'a> {
    provider: &'a dyn ChainDataProvider,
    tokens: &'a [String],
    decimals: &'a DecimalsTable,
    pool: &'a ProxyPool,
    prices: &'a PriceBook,
    address_prefix: usize,
    address_suffix: usize,
}

impl<'a> WalletChecker<'a> {
    pub fn new(
        provider: &'a dyn ChainDataProvider,
        tokens: &'a [String],
        decimals: &'a DecimalsTable,
        pool: &'a ProxyPool,
        prices: &'a PriceBook,
    ) -> Self {
        Self {
            provider,
            tokens,
            decimals,
            pool,
            prices,
            address_prefix: crate::constants::ADDRESS_PREFIX_LEN,
            address_suffix: crate::constants::ADDRESS_SUFFIX_LEN,
        }
    }

    pub fn with_address_format(mut self, prefix: usize, suffix: usize) -> Self {
        self.address_prefix = prefix;
        self.address_suffix = suffix;
        self
    }

    fn short(&self, address: &str) -> String {
        shorten_address(address, self.address_prefix, self.address_suffix)
    }

    /// Fetch every balance of a wallet on one route
    ///
    /// Failed requests are logged and count as zero.
    pub async fn fetch_balances(&self, route: &Route, address: &str) -> WalletBalances {
        let mut balances = WalletBalances::default();
        let short = self.short(address);

        let result = self.provider.sui_balance(route, address).await;
        let sui = self.settle(&mut balances, &short, "SUI balance", route, result);
        balances.sui = sui;

        let result = self.provider.staked_sui(route, address).await;
        let staked = self.settle(&mut balances, &short, "staked SUI", route, result);
        balances.staked = staked;

        for coin_type in self.tokens {
            let decimals = self.decimals.get(coin_type);
            let result = self
                .provider
                .token_balance(route, address, coin_type, decimals)
                .await;
            let what = format!("balance of {}", coin_type);
            let amount = self.settle(&mut balances, &short, &what, route, result);

            balances.tokens.push(TokenHolding {
                coin_type: coin_type.clone(),
                symbol: token_symbol(coin_type).to_string(),
                amount,
            });
        }

        balances
    }

    fn settle(
        &self,
        balances: &mut WalletBalances,
        short: &str,
        what: &str,
        route: &Route,
        result: CheckerResult<f64>,
    ) -> f64 {
        match result {
            Ok(value) => value,
            Err(e) => {
                logger::error(
                    LogTag::Wallet,
                    &format!("Failed to get {} for {} via {}: {}", what, short, route, e),
                );
                balances.failed_requests += 1;
                0.0
            }
        }
    }

    /// Check the wallet at 1-based `index`
    ///
    /// Routes are tried in rotation order until one answers every request or
    /// shows any balance; otherwise the last attempt is kept.
    pub async fn check_wallet(&self, index: usize, address: &str) -> WalletReport {
        let routes = self.pool.rotation(index);
        let total = routes.len();
        let short = self.short(address);

        let mut kept: Option<(WalletBalances, Route, usize)> = None;
        for (attempt, route) in routes.into_iter().enumerate() {
            let balances = self.fetch_balances(&route, address).await;
            let done = balances.failed_requests == 0 || balances.has_any_balance();

            if !done && attempt + 1 < total {
                logger::warning(
                    LogTag::Wallet,
                    &format!(
                        "Attempt {} failed for {} via {}, trying another proxy",
                        attempt + 1,
                        short,
                        route
                    ),
                );
            }

            kept = Some((balances, route, attempt + 1));
            if done {
                break;
            }
        }

        let (balances, route, attempts) =
            kept.unwrap_or_else(|| (WalletBalances::default(), Route::Direct, 0));

        if balances.failed_requests > 0 && !balances.has_any_balance() {
            logger::warning(
                LogTag::Wallet,
                &format!("{} could not be fetched on any route, reporting zero", short),
            );
        }
        logger::info(
            LogTag::Wallet,
            &format!(
                "Wallet #{} {} checked via {} ({} attempt(s))",
                index, short, route, attempts
            ),
        );

        WalletReport::new(index, address, balances, self.prices, route, attempts)
    }
}
