/// Sui JSON-RPC client
///
/// Methods used:
/// 1. suix_getBalance    - liquid balance of a coin type (SUI when omitted)
/// 2. suix_getStakes     - validator delegations and their principals
/// 3. suix_getCoinMetadata - decimals of a coin type
use super::provider::ChainDataProvider;
use super::types::{parse_amount, Balance, CoinMetadata, DelegatedStake, RpcRequest, RpcResponse};
use crate::constants::SUI_DECIMALS;
use crate::errors::{CheckerError, CheckerResult};
use crate::helpers::from_base_units;
use crate::http::{check_status, with_retries, HttpRouter, RetryPolicy, Route};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct SuiRpcClient {
    router: Arc<HttpRouter>,
    url: String,
    timeout: Duration,
    retry: RetryPolicy,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    pub fn new(router: Arc<HttpRouter>, url: impl Into<String>, timeout: Duration, retry: RetryPolicy) -> Self {
        Self {
            router,
            url: url.into(),
            timeout,
            retry,
            next_id: AtomicU64::new(1),
        }
    }

    /// Call a method with retries; `Ok(None)` when the node returns no result
    async fn call<T: DeserializeOwned>(
        &self,
        route: &Route,
        method: &str,
        params: Value,
    ) -> CheckerResult<Option<T>> {
        let label = format!("{} via {}", method, route);
        with_retries(&self.retry, LogTag::Rpc, &label, || {
            self.call_once(route, method, params.clone())
        })
        .await
    }

    async fn call_once<T: DeserializeOwned>(
        &self,
        route: &Route,
        method: &str,
        params: Value,
    ) -> CheckerResult<Option<T>> {
        let client = self.router.client(route)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        logger::verbose(
            LogTag::Rpc,
            &format!("-> {} #{} {}", method, id, request.params),
        );

        let response = client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckerError::from_reqwest(&self.url, e))?;
        let response = check_status(&self.url, response)?;

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| CheckerError::from_reqwest(&self.url, e))?;

        if let Some(error) = body.error {
            return Err(CheckerError::Rpc {
                method: method.to_string(),
                code: error.code,
                message: error.message,
            });
        }
        Ok(body.result)
    }

    async fn balance(&self, route: &Route, params: Value) -> CheckerResult<u128> {
        let balance: Option<Balance> = self.call(route, "suix_getBalance", params).await?;
        match balance {
            Some(balance) => parse_amount(&balance.total_balance).ok_or_else(|| {
                CheckerError::InvalidResponse(format!(
                    "totalBalance '{}' is not an integer",
                    balance.total_balance
                ))
            }),
            None => Ok(0),
        }
    }
}

/// Sum of every stake principal across all delegations, in MIST
pub fn total_principal(delegations: &[DelegatedStake]) -> CheckerResult<u128> {
    delegations
        .iter()
        .flat_map(|delegation| delegation.stakes.iter())
        .try_fold(0u128, |total, stake| {
            parse_amount(&stake.principal)
                .map(|principal| total.saturating_add(principal))
                .ok_or_else(|| {
                    CheckerError::InvalidResponse(format!(
                        "stake principal '{}' is not an integer",
                        stake.principal
                    ))
                })
        })
}

#[async_trait]
impl ChainDataProvider for SuiRpcClient {
    async fn sui_balance(&self, route: &Route, owner: &str) -> CheckerResult<f64> {
        let mist = self.balance(route, json!([owner])).await?;
        Ok(from_base_units(mist, SUI_DECIMALS))
    }

    async fn staked_sui(&self, route: &Route, owner: &str) -> CheckerResult<f64> {
        let delegations: Vec<DelegatedStake> = self
            .call(route, "suix_getStakes", json!([owner]))
            .await?
            .unwrap_or_default();
        let mist = total_principal(&delegations)?;
        Ok(from_base_units(mist, SUI_DECIMALS))
    }

    async fn token_balance(
        &self,
        route: &Route,
        owner: &str,
        coin_type: &str,
        decimals: u8,
    ) -> CheckerResult<f64> {
        let amount = self.balance(route, json!([owner, coin_type])).await?;
        Ok(from_base_units(amount, decimals))
    }

    async fn coin_decimals(&self, route: &Route, coin_type: &str) -> CheckerResult<Option<u8>> {
        let metadata: Option<CoinMetadata> = self
            .call(route, "suix_getCoinMetadata", json!([coin_type]))
            .await?;
        Ok(metadata.map(|m| m.decimals))
    }
}
