use crate::errors::CheckerResult;
use crate::http::Route;
use async_trait::async_trait;

/// Core trait for fetching on-chain balances
///
/// Every call names the route it must travel so the caller controls proxy
/// rotation.
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    /// Liquid SUI balance in whole SUI
    async fn sui_balance(&self, route: &Route, owner: &str) -> CheckerResult<f64>;

    /// Total staked principal in whole SUI
    async fn staked_sui(&self, route: &Route, owner: &str) -> CheckerResult<f64>;

    /// Token balance scaled by `decimals`
    async fn token_balance(
        &self,
        route: &Route,
        owner: &str,
        coin_type: &str,
        decimals: u8,
    ) -> CheckerResult<f64>;

    /// Decimals from coin metadata, `None` when the node has no metadata
    async fn coin_decimals(&self, route: &Route, coin_type: &str) -> CheckerResult<Option<u8>>;
}
