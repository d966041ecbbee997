use super::symbols::CoinIdMap;
use crate::errors::CheckerResult;
use crate::http::Route;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for USD price feeds
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// USD prices keyed by CoinGecko id; ids the feed does not know are absent
    async fn fetch_usd_prices(
        &self,
        route: &Route,
        coin_ids: &[String],
    ) -> CheckerResult<HashMap<String, f64>>;
}

/// USD price per symbol for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBook {
    prices: HashMap<String, f64>,
}

impl PriceBook {
    /// Every symbol priced at zero
    pub fn unavailable(symbols: &[String]) -> Self {
        Self {
            prices: symbols.iter().map(|s| (s.clone(), 0.0)).collect(),
        }
    }

    pub fn from_prices(prices: HashMap<String, f64>) -> Self {
        Self { prices }
    }

    /// Map id-keyed feed prices back onto symbols
    pub fn from_feed(symbols: &[String], ids: &CoinIdMap, feed: &HashMap<String, f64>) -> Self {
        let prices = symbols
            .iter()
            .map(|symbol| {
                let price = feed.get(&ids.id_for(symbol)).copied().unwrap_or(0.0);
                (symbol.clone(), price)
            })
            .collect();
        Self { prices }
    }

    /// USD price of a symbol, 0.0 when unknown
    pub fn price(&self, symbol: &str) -> f64 {
        self.prices.get(symbol).copied().unwrap_or(0.0)
    }
}

/// Fetch prices for `symbols`, trying each route in order
///
/// Network failures move on to the next route. Any other failure (HTTP
/// status, exhausted rate limit, bad body) prices everything at zero.
pub async fn fetch_price_book(
    provider: &dyn PriceProvider,
    symbols: &[String],
    ids: &CoinIdMap,
    routes: &[Route],
) -> PriceBook {
    let mut coin_ids: Vec<String> = symbols.iter().map(|s| ids.id_for(s)).collect();
    coin_ids.sort();
    coin_ids.dedup();

    for route in routes {
        match provider.fetch_usd_prices(route, &coin_ids).await {
            Ok(feed) => {
                let book = PriceBook::from_feed(symbols, ids, &feed);
                logger::info(
                    LogTag::Prices,
                    &format!("Fetched {} prices via {}", feed.len(), route),
                );
                return book;
            }
            Err(e) if e.is_network() => {
                logger::error(
                    LogTag::Prices,
                    &format!("Price request via {} failed: {}", route, e),
                );
            }
            Err(e) => {
                logger::error(LogTag::Prices, &format!("Failed to fetch prices: {}", e));
                return PriceBook::unavailable(symbols);
            }
        }
    }

    logger::warning(
        LogTag::Prices,
        "Prices unavailable on every route, valuing tokens at zero",
    );
    PriceBook::unavailable(symbols)
}
