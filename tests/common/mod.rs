#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use sui_checker::errors::{CheckerError, CheckerResult};
use sui_checker::http::Route;
use sui_checker::pricing::PriceProvider;
use sui_checker::proxy::{ProxyEndpoint, ProxyProbe};
use sui_checker::rpc::ChainDataProvider;

fn refused(route: &Route) -> CheckerError {
    CheckerError::Network {
        endpoint: "https://fullnode.mainnet.sui.io:443".to_string(),
        message: format!("connection via {} refused", route),
    }
}

/// In-memory chain keyed by owner address
#[derive(Default)]
pub struct MemoryChain {
    pub sui: HashMap<String, f64>,
    pub staked: HashMap<String, f64>,
    /// (owner, coin type) -> amount
    pub tokens: HashMap<(String, String), f64>,
    pub decimals: HashMap<String, u8>,
    /// Proxy hosts that refuse every request
    pub dead_hosts: HashSet<String>,
    /// Proxy hosts that answer every request with HTTP 502
    pub bad_gateway_hosts: HashSet<String>,
    pub decimals_seen: Mutex<HashMap<String, u8>>,
}

impl MemoryChain {
    fn reachable(&self, route: &Route) -> CheckerResult<()> {
        match route.proxy() {
            Some(p) if self.dead_hosts.contains(p.host()) => Err(refused(route)),
            Some(p) if self.bad_gateway_hosts.contains(p.host()) => Err(CheckerError::from_status(
                "https://fullnode.mainnet.sui.io:443",
                502,
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ChainDataProvider for MemoryChain {
    async fn sui_balance(&self, route: &Route, owner: &str) -> CheckerResult<f64> {
        self.reachable(route)?;
        Ok(self.sui.get(owner).copied().unwrap_or(0.0))
    }

    async fn staked_sui(&self, route: &Route, owner: &str) -> CheckerResult<f64> {
        self.reachable(route)?;
        Ok(self.staked.get(owner).copied().unwrap_or(0.0))
    }

    async fn token_balance(
        &self,
        route: &Route,
        owner: &str,
        coin_type: &str,
        decimals: u8,
    ) -> CheckerResult<f64> {
        self.reachable(route)?;
        self.decimals_seen
            .lock()
            .unwrap()
            .insert(coin_type.to_string(), decimals);
        Ok(self
            .tokens
            .get(&(owner.to_string(), coin_type.to_string()))
            .copied()
            .unwrap_or(0.0))
    }

    async fn coin_decimals(&self, route: &Route, coin_type: &str) -> CheckerResult<Option<u8>> {
        self.reachable(route)?;
        Ok(self.decimals.get(coin_type).copied())
    }
}

/// Fixed USD prices keyed by CoinGecko id
#[derive(Default)]
pub struct FixedPrices {
    pub usd: HashMap<String, f64>,
    pub requested: Mutex<Vec<String>>,
}

#[async_trait]
impl PriceProvider for FixedPrices {
    async fn fetch_usd_prices(
        &self,
        _route: &Route,
        coin_ids: &[String],
    ) -> CheckerResult<HashMap<String, f64>> {
        self.requested.lock().unwrap().extend(coin_ids.iter().cloned());
        Ok(coin_ids
            .iter()
            .filter_map(|id| self.usd.get(id).map(|p| (id.clone(), *p)))
            .collect())
    }
}

/// Probe where listed hosts never answer
#[derive(Default)]
pub struct HostProbe {
    pub dead_hosts: HashSet<String>,
}

#[async_trait]
impl ProxyProbe for HostProbe {
    async fn probe(&self, proxy: &ProxyEndpoint) -> CheckerResult<()> {
        if self.dead_hosts.contains(proxy.host()) {
            Err(CheckerError::Network {
                endpoint: "https://api.ipify.org".to_string(),
                message: "proxy did not answer".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

pub fn address(n: u8) -> String {
    format!("0x{}", format!("{:02x}", n).repeat(32))
}
