/// Sui JSON-RPC wire types
///
/// Only the fields the checker reads are modelled; everything is defaulted
/// so that extra or missing fields in node responses do not break parsing.
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// `suix_getBalance` result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Balance {
    pub coin_type: String,
    pub coin_object_count: u64,
    /// Base units as a decimal string
    pub total_balance: String,
}

/// One validator delegation from `suix_getStakes`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelegatedStake {
    pub validator_address: String,
    pub staking_pool: String,
    pub stakes: Vec<Stake>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stake {
    pub staked_sui_id: String,
    /// MIST as a decimal string
    pub principal: String,
    pub status: String,
    pub estimated_reward: Option<String>,
}

/// `suix_getCoinMetadata` result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinMetadata {
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub id: Option<String>,
}

/// Parse a base-unit amount string; empty counts as zero
pub fn parse_amount(raw: &str) -> Option<u128> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_response() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"coinType":"0x2::sui::SUI","coinObjectCount":3,"totalBalance":"1500000000","lockedBalance":{}}}"#;
        let parsed: RpcResponse<Balance> = serde_json::from_str(body).unwrap();
        let balance = parsed.result.unwrap();
        assert_eq!(balance.coin_object_count, 3);
        assert_eq!(parse_amount(&balance.total_balance), Some(1_500_000_000));
    }

    #[test]
    fn test_stakes_response() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":[
            {"validatorAddress":"0xv1","stakingPool":"0xp1","stakes":[
                {"stakedSuiId":"0xs1","principal":"1000000000","status":"Active","estimatedReward":"5"},
                {"stakedSuiId":"0xs2","principal":"2000000000","status":"Pending"}
            ]}
        ]}"#;
        let parsed: RpcResponse<Vec<DelegatedStake>> = serde_json::from_str(body).unwrap();
        let stakes = parsed.result.unwrap();
        assert_eq!(stakes[0].stakes.len(), 2);
        assert_eq!(stakes[0].stakes[1].estimated_reward, None);
    }

    #[test]
    fn test_null_metadata_and_error() {
        let parsed: RpcResponse<CoinMetadata> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
        assert!(parsed.result.is_none());

        let parsed: RpcResponse<Balance> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid params"}}"#,
        )
        .unwrap();
        assert!(parsed.result.is_none());
        assert_eq!(parsed.error.unwrap().code, -32602);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Some(0));
        assert_eq!(parse_amount("340282366920938463463374607431768211455"), Some(u128::MAX));
        assert_eq!(parse_amount("12abc"), None);
    }
}
