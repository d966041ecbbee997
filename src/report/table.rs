use crate::constants::{ADDRESS_COLUMN_WIDTH, SUI_SYMBOL, TABLE_RULE_WIDTH, VALUE_COLUMN_WIDTH};
use crate::helpers::{format_thousands, format_usd, shorten_address};
use crate::pricing::{display_symbol, token_symbol, PriceBook};
use crate::wallet::WalletReport;
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

const PRICE_UNAVAILABLE: &str = "price unavailable";

/// Report layout switches
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub min_token_value: f64,
    pub address_prefix: usize,
    pub address_suffix: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            min_token_value: crate::constants::MIN_TOKEN_VALUE_USD,
            address_prefix: crate::constants::ADDRESS_PREFIX_LEN,
            address_suffix: crate::constants::ADDRESS_SUFFIX_LEN,
        }
    }
}

/// Format a balance cell: `-`, `1.00 (price unavailable)` or `1.00 ($3.50)`
pub fn format_balance(balance: f64, price: f64) -> String {
    if balance == 0.0 {
        return "-".to_string();
    }
    if price == 0.0 {
        return format!("{} ({})", format_thousands(balance), PRICE_UNAVAILABLE);
    }
    format!("{} ({})", format_thousands(balance), format_usd(balance * price))
}

fn format_total_value(value: f64) -> String {
    if value > 0.0 {
        format_usd(value)
    } else {
        PRICE_UNAVAILABLE.to_string()
    }
}

/// Tokens that deserve a column
///
/// A token qualifies when some wallet holds it and its combined value
/// exceeds `min_value`.
pub fn significant_tokens(
    tokens: &[String],
    reports: &[WalletReport],
    prices: &PriceBook,
    min_value: f64,
) -> Vec<String> {
    tokens
        .iter()
        .filter(|coin_type| {
            let held = reports.iter().any(|r| r.balances.token(coin_type) > 0.0);
            let total: f64 = reports.iter().map(|r| r.balances.token(coin_type)).sum();
            held && total * prices.price(token_symbol(coin_type)) > min_value
        })
        .cloned()
        .collect()
}

/// Aggregated table ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub headers: Vec<String>,
    /// One row per wallet, in wallets-file order
    pub rows: Vec<Vec<String>>,
    pub totals: Vec<String>,
    pub significant_tokens: Vec<String>,
    pub total_value_usd: f64,
}

impl ReportTable {
    pub fn build(
        tokens: &[String],
        reports: &[WalletReport],
        prices: &PriceBook,
        options: &ReportOptions,
    ) -> Self {
        let sui_price = prices.price(SUI_SYMBOL);
        let significant = significant_tokens(tokens, reports, prices, options.min_token_value);

        let mut headers = vec![
            "#".to_string(),
            "Address".to_string(),
            "SUI".to_string(),
            "Staked".to_string(),
        ];
        headers.extend(
            significant
                .iter()
                .map(|coin_type| display_symbol(token_symbol(coin_type)).to_string()),
        );
        headers.push("Total SUI".to_string());
        headers.push("Total value".to_string());

        let rows = reports
            .iter()
            .map(|report| {
                let mut row = vec![
                    report.index.to_string(),
                    shorten_address(&report.address, options.address_prefix, options.address_suffix),
                    format_balance(report.balances.sui, sui_price),
                    format_balance(report.balances.staked, sui_price),
                ];
                row.extend(significant.iter().map(|coin_type| {
                    format_balance(
                        report.balances.token(coin_type),
                        prices.price(token_symbol(coin_type)),
                    )
                }));
                row.push(format_balance(report.total_sui, sui_price));
                row.push(format_total_value(report.total_value_usd));
                row
            })
            .collect();

        let sum = |f: &dyn Fn(&WalletReport) -> f64| reports.iter().map(f).sum::<f64>();
        let total_sui = sum(&|r| r.total_sui);
        let total_value_usd = sum(&|r| r.total_value_usd);

        let mut totals = vec![
            "TOTAL".to_string(),
            format!("{} wallets", reports.len()),
            format_balance(sum(&|r| r.balances.sui), sui_price),
            format_balance(sum(&|r| r.balances.staked), sui_price),
        ];
        totals.extend(significant.iter().map(|coin_type| {
            format_balance(
                sum(&|r| r.balances.token(coin_type)),
                prices.price(token_symbol(coin_type)),
            )
        }));
        totals.push(format_balance(total_sui, sui_price));
        totals.push(format_total_value(total_value_usd));

        Self {
            headers,
            rows,
            totals,
            significant_tokens: significant,
            total_value_usd,
        }
    }

    /// Render as a grid with right-aligned cells
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.clone());
        for row in &self.rows {
            builder.push_record(row.clone());
        }
        builder.push_record(self.totals.clone());

        let mut table = builder.build();
        table
            .with(Style::ascii())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .with(Modify::new(Columns::new(1..2)).with(Width::wrap(ADDRESS_COLUMN_WIDTH)))
            .with(Modify::new(Columns::new(2..)).with(Width::wrap(VALUE_COLUMN_WIDTH)));

        table.to_string()
    }

    /// Print the rule and the table to stdout
    pub fn print(&self) {
        println!();
        println!("{}", "=".repeat(TABLE_RULE_WIDTH));
        println!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Route;
    use crate::wallet::{TokenHolding, WalletBalances};
    use std::collections::HashMap;

    const USDC: &str = "0xdba3::usdc::USDC";
    const CERT: &str = "0x549e::cert::CERT";
    const DUST: &str = "0x1111::dust::DUST";

    fn prices() -> PriceBook {
        PriceBook::from_prices(HashMap::from([
            ("SUI".to_string(), 2.0),
            ("USDC".to_string(), 1.0),
            ("CERT".to_string(), 2.1),
            ("DUST".to_string(), 0.0001),
        ]))
    }

    fn report(index: usize, sui: f64, usdc: f64, cert: f64, dust: f64) -> WalletReport {
        let tokens = [(USDC, "USDC", usdc), (CERT, "CERT", cert), (DUST, "DUST", dust)]
            .into_iter()
            .map(|(coin_type, symbol, amount)| TokenHolding {
                coin_type: coin_type.to_string(),
                symbol: symbol.to_string(),
                amount,
            })
            .collect();
        let balances = WalletBalances {
            sui,
            staked: 0.0,
            tokens,
            ..Default::default()
        };
        WalletReport::new(
            index,
            &format!("0x{:0>64}", index),
            balances,
            &prices(),
            Route::Direct,
            1,
        )
    }

    fn token_list() -> Vec<String> {
        vec![USDC.to_string(), CERT.to_string(), DUST.to_string()]
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(0.0, 3.0), "-");
        assert_eq!(format_balance(1234.5, 0.0), "1,234.50 (price unavailable)");
        assert_eq!(format_balance(10.0, 3.5), "10.00 ($35.00)");
    }

    #[test]
    fn test_one_row_per_wallet() {
        let reports: Vec<_> = (1..=4).map(|i| report(i, i as f64, 0.0, 0.0, 0.0)).collect();
        let table = ReportTable::build(&token_list(), &reports, &prices(), &ReportOptions::default());

        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[0][1], "0x000...001");
        assert_eq!(table.totals[0], "TOTAL");
        assert_eq!(table.totals[1], "4 wallets");
        // 1 + 2 + 3 + 4 SUI at $2
        assert_eq!(table.totals.last().unwrap(), "$20.00");
    }

    #[test]
    fn test_significant_columns() {
        let reports = vec![report(1, 1.0, 50.0, 3.0, 100.0), report(2, 0.0, 0.0, 0.0, 0.0)];
        let table = ReportTable::build(&token_list(), &reports, &prices(), &ReportOptions::default());

        // DUST is held but worth $0.01 in total
        assert_eq!(table.significant_tokens, vec![USDC.to_string(), CERT.to_string()]);
        assert_eq!(
            table.headers,
            vec!["#", "Address", "SUI", "Staked", "USDC", "VSUI", "Total SUI", "Total value"]
        );
        assert_eq!(table.rows[0][4], "50.00 ($50.00)");
        assert_eq!(table.rows[1][4], "-");
        // CERT counts towards total SUI
        assert_eq!(table.rows[0][6], "4.00 ($8.00)");
        assert_eq!(table.rows[1][7], "price unavailable");
    }

    #[test]
    fn test_render_contains_cells() {
        let reports = vec![report(1, 1.5, 0.0, 0.0, 0.0)];
        let table = ReportTable::build(&token_list(), &reports, &prices(), &ReportOptions::default());
        let rendered = table.render();

        assert!(rendered.contains("Total value"));
        assert!(rendered.contains("1.50 ($3.00)"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.starts_with('+'));
    }
}
