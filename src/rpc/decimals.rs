/// Decimals lookup, resolved once per token before wallets are processed
use super::provider::ChainDataProvider;
use crate::constants::{DEFAULT_TOKEN_DECIMALS, SUI_COIN_TYPE, SUI_DECIMALS};
use crate::http::Route;
use crate::logger::{self, LogTag};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DecimalsTable {
    decimals: HashMap<String, u8>,
}

impl DecimalsTable {
    pub fn insert(&mut self, coin_type: &str, decimals: u8) {
        self.decimals.insert(coin_type.to_string(), decimals);
    }

    /// Decimals for a coin type, falling back to the default
    pub fn get(&self, coin_type: &str) -> u8 {
        self.decimals
            .get(coin_type)
            .copied()
            .unwrap_or(DEFAULT_TOKEN_DECIMALS)
    }
}

/// Fetch decimals for every token, trying each route in order
///
/// A token whose metadata cannot be fetched on any route gets the default.
pub async fn resolve_decimals(
    provider: &dyn ChainDataProvider,
    tokens: &[String],
    routes: &[Route],
) -> DecimalsTable {
    let mut table = DecimalsTable::default();

    for coin_type in tokens {
        if coin_type == SUI_COIN_TYPE {
            table.insert(coin_type, SUI_DECIMALS);
            continue;
        }

        let mut resolved = None;
        for route in routes {
            match provider.coin_decimals(route, coin_type).await {
                Ok(Some(decimals)) => {
                    resolved = Some(decimals);
                    break;
                }
                Ok(None) => {
                    logger::debug(
                        LogTag::Rpc,
                        &format!("No coin metadata for {}", coin_type),
                    );
                    resolved = Some(DEFAULT_TOKEN_DECIMALS);
                    break;
                }
                Err(e) if e.is_network() || e.is_rate_limited() => continue,
                Err(_) => break,
            }
        }

        let decimals = resolved.unwrap_or_else(|| {
            logger::warning(
                LogTag::Rpc,
                &format!("Using {} decimals for {}", DEFAULT_TOKEN_DECIMALS, coin_type),
            );
            DEFAULT_TOKEN_DECIMALS
        });
        table.insert(coin_type, decimals);
    }

    table
}
