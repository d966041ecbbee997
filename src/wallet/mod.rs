//! Wallet balance collection

pub mod checker;
pub mod types;

pub use checker::WalletChecker;
pub use types::{wallet_value_usd, TokenHolding, WalletBalances, WalletReport};
