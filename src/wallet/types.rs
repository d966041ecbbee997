use crate::constants::{AFSUI_SYMBOL, SUI_SYMBOL, VSUI_SYMBOL};
use crate::http::Route;
use crate::pricing::PriceBook;

/// Balance of one configured token
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHolding {
    pub coin_type: String,
    pub symbol: String,
    pub amount: f64,
}

/// Everything fetched for a wallet on one route
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletBalances {
    pub sui: f64,
    pub staked: f64,
    /// In tokens-file order
    pub tokens: Vec<TokenHolding>,
    /// Requests that failed for any reason
    pub failed_requests: usize,
}

impl WalletBalances {
    pub fn has_any_balance(&self) -> bool {
        self.sui != 0.0 || self.staked != 0.0 || self.tokens.iter().any(|t| t.amount != 0.0)
    }

    /// Balance of a coin type, 0.0 when not configured
    pub fn token(&self, coin_type: &str) -> f64 {
        self.tokens
            .iter()
            .find(|t| t.coin_type == coin_type)
            .map(|t| t.amount)
            .unwrap_or(0.0)
    }

    /// Summed balance of every token with this symbol
    pub fn symbol_total(&self, symbol: &str) -> f64 {
        self.tokens
            .iter()
            .filter(|t| t.symbol == symbol)
            .map(|t| t.amount)
            .sum()
    }
}

/// Result row for one wallet
#[derive(Debug, Clone, PartialEq)]
pub struct WalletReport {
    /// 1-based position in the wallets file
    pub index: usize,
    pub address: String,
    pub balances: WalletBalances,
    /// Aftermath liquid staked SUI
    pub af_sui: f64,
    /// Volo liquid staked SUI (CERT)
    pub v_sui: f64,
    pub total_sui: f64,
    pub total_value_usd: f64,
    /// Route whose result was kept
    pub route: Route,
    /// Routes tried
    pub attempts: usize,
}

impl WalletReport {
    pub fn new(
        index: usize,
        address: &str,
        balances: WalletBalances,
        prices: &PriceBook,
        route: Route,
        attempts: usize,
    ) -> Self {
        let af_sui = balances.symbol_total(AFSUI_SYMBOL);
        let v_sui = balances.symbol_total(VSUI_SYMBOL);
        let total_sui = balances.sui + balances.staked + af_sui + v_sui;
        let total_value_usd = wallet_value_usd(&balances, prices);

        Self {
            index,
            address: address.to_string(),
            balances,
            af_sui,
            v_sui,
            total_sui,
            total_value_usd,
            route,
            attempts,
        }
    }
}

/// USD value of a wallet; only positive prices contribute
pub fn wallet_value_usd(balances: &WalletBalances, prices: &PriceBook) -> f64 {
    let mut total = 0.0;

    let sui_price = prices.price(SUI_SYMBOL);
    if sui_price > 0.0 {
        total += (balances.sui + balances.staked) * sui_price;
    }

    for holding in &balances.tokens {
        let price = prices.price(&holding.symbol);
        if price > 0.0 {
            total += holding.amount * price;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn holding(symbol: &str, amount: f64) -> TokenHolding {
        TokenHolding {
            coin_type: format!("0xabc::{}::{}", symbol.to_lowercase(), symbol),
            symbol: symbol.to_string(),
            amount,
        }
    }

    fn prices() -> PriceBook {
        PriceBook::from_prices(HashMap::from([
            ("SUI".to_string(), 3.0),
            ("AFSUI".to_string(), 3.2),
            ("USDC".to_string(), 1.0),
        ]))
    }

    #[test]
    fn test_value_is_balance_times_price() {
        let balances = WalletBalances {
            sui: 10.0,
            staked: 5.0,
            tokens: vec![holding("USDC", 250.5), holding("AFSUI", 2.0), holding("DEEP", 1000.0)],
            ..Default::default()
        };
        let expected = 15.0 * 3.0 + 250.5 * 1.0 + 2.0 * 3.2;
        assert!((wallet_value_usd(&balances, &prices()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_report_totals() {
        let balances = WalletBalances {
            sui: 1.5,
            staked: 2.0,
            tokens: vec![holding("AFSUI", 0.5), holding("CERT", 0.25), holding("USDC", 9.0)],
            ..Default::default()
        };
        let report = WalletReport::new(1, "0xabc", balances, &prices(), Route::Direct, 1);

        assert_eq!(report.af_sui, 0.5);
        assert_eq!(report.v_sui, 0.25);
        assert!((report.total_sui - 4.25).abs() < 1e-12);
        assert!(report.balances.has_any_balance());
        assert_eq!(report.balances.token("0xabc::usdc::USDC"), 9.0);
        assert_eq!(report.balances.token("0xabc::nope::NOPE"), 0.0);
    }

    #[test]
    fn test_empty_wallet_has_no_value() {
        let balances = WalletBalances::default();
        assert!(!balances.has_any_balance());
        assert_eq!(wallet_value_usd(&balances, &PriceBook::default()), 0.0);
    }
}
