/// CoinGecko price client
///
/// API Documentation: https://docs.coingecko.com/reference/simple-price
///
/// Endpoint used:
/// 1. /api/v3/simple/price?ids=<ids>&vs_currencies=usd - batched USD prices
use super::provider::PriceProvider;
use crate::errors::{CheckerError, CheckerResult};
use crate::http::{check_status, with_retries, HttpRouter, RetryPolicy, Route};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// `{"sui": {"usd": 3.41}, ...}`
pub type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

pub struct CoinGeckoClient {
    router: Arc<HttpRouter>,
    price_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl CoinGeckoClient {
    pub fn new(
        router: Arc<HttpRouter>,
        price_url: impl Into<String>,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            router,
            price_url: price_url.into(),
            timeout,
            retry,
        }
    }

    async fn fetch_once(&self, route: &Route, ids: &str) -> CheckerResult<SimplePriceResponse> {
        let client = self.router.client(route)?;
        let response = client
            .get(&self.price_url)
            .query(&[("ids", ids), ("vs_currencies", "usd")])
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CheckerError::from_reqwest(&self.price_url, e))?;
        let response = check_status(&self.price_url, response)?;

        response
            .json()
            .await
            .map_err(|e| CheckerError::from_reqwest(&self.price_url, e))
    }
}

/// Keep only the USD quote of every id
pub fn usd_prices(response: SimplePriceResponse) -> HashMap<String, f64> {
    response
        .into_iter()
        .filter_map(|(id, quotes)| quotes.get("usd").map(|price| (id, *price)))
        .collect()
}

#[async_trait]
impl PriceProvider for CoinGeckoClient {
    async fn fetch_usd_prices(
        &self,
        route: &Route,
        coin_ids: &[String],
    ) -> CheckerResult<HashMap<String, f64>> {
        if coin_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids = coin_ids.join(",");
        let label = format!("CoinGecko prices via {}", route);
        let response = with_retries(&self.retry, LogTag::Prices, &label, || {
            self.fetch_once(route, &ids)
        })
        .await?;

        logger::debug(LogTag::Prices, &format!("CoinGecko response: {:?}", response));
        Ok(usd_prices(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_prices() {
        let response: SimplePriceResponse = serde_json::from_str(
            r#"{"sui":{"usd":3.41},"tether":{"usd":1.0},"odd":{"eur":2.0}}"#,
        )
        .unwrap();
        let prices = usd_prices(response);

        assert_eq!(prices.len(), 2);
        assert_eq!(prices["sui"], 3.41);
        assert!(!prices.contains_key("odd"));
    }
}
