/// Token symbols and their CoinGecko ids
use std::collections::BTreeMap;

/// Symbol of a coin type: the last `::` segment, or the input itself
pub fn token_symbol(coin_type: &str) -> &str {
    if coin_type.contains("::") {
        coin_type.rsplit("::").next().unwrap_or(coin_type)
    } else {
        coin_type
    }
}

/// Column label for a symbol; Volo's CERT is better known as vSUI
pub fn display_symbol(symbol: &str) -> &str {
    match symbol {
        "CERT" => "VSUI",
        other => other,
    }
}

/// Symbol -> CoinGecko id lookup
#[derive(Debug, Clone, PartialEq)]
pub struct CoinIdMap {
    ids: BTreeMap<String, String>,
}

impl Default for CoinIdMap {
    fn default() -> Self {
        let ids = [
            ("SUI", "sui"),
            ("USDC", "usd-coin"),
            ("USDT", "tether"),
            ("BUCK", "bucket-protocol-buck-stablecoin"),
            ("AFSUI", "aftermath-staked-sui"),
            ("NS", "suins-token"),
            ("WAL", "walrus-2"),
            ("CERT", "volo-staked-sui"),
        ]
        .into_iter()
        .map(|(symbol, id)| (symbol.to_string(), id.to_string()))
        .collect();
        Self { ids }
    }
}

impl CoinIdMap {
    /// Defaults extended (or overridden) by configured entries
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut map = Self::default();
        for (symbol, id) in overrides {
            map.ids.insert(symbol.to_uppercase(), id.clone());
        }
        map
    }

    /// CoinGecko id for a symbol; unknown symbols map to their lowercase form
    pub fn id_for(&self, symbol: &str) -> String {
        self.ids
            .get(&symbol.to_uppercase())
            .cloned()
            .unwrap_or_else(|| symbol.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_symbol() {
        assert_eq!(token_symbol("0x2::sui::SUI"), "SUI");
        assert_eq!(
            token_symbol("0xf325ce1300e8dac124071d3152c5c5ee6174914f8bc2161e88329cf579246efc::afsui::AFSUI"),
            "AFSUI"
        );
        assert_eq!(token_symbol("USDC"), "USDC");
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol("CERT"), "VSUI");
        assert_eq!(display_symbol("USDC"), "USDC");
    }

    #[test]
    fn test_coin_ids() {
        let overrides = BTreeMap::from([
            ("hasui".to_string(), "haedal-staked-sui".to_string()),
            ("WAL".to_string(), "walrus".to_string()),
        ]);
        let map = CoinIdMap::with_overrides(&overrides);

        assert_eq!(map.id_for("SUI"), "sui");
        assert_eq!(map.id_for("HASUI"), "haedal-staked-sui");
        assert_eq!(map.id_for("WAL"), "walrus");
        assert_eq!(map.id_for("DEEP"), "deep");
    }
}
