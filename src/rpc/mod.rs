//! Sui full node access

pub mod client;
pub mod decimals;
pub mod provider;
pub mod types;

pub use client::SuiRpcClient;
pub use decimals::{resolve_decimals, DecimalsTable};
pub use provider::ChainDataProvider;
