//! Token prices in USD

pub mod coingecko;
pub mod provider;
pub mod symbols;

pub use coingecko::CoinGeckoClient;
pub use provider::{fetch_price_book, PriceBook, PriceProvider};
pub use symbols::{display_symbol, token_symbol, CoinIdMap};
