//! sui-checker
//!
//! Reports Sui wallet balances, staked SUI and token holdings with USD
//! values, optionally routing requests through a rotating proxy pool.

pub mod arguments;
pub mod config;
pub mod constants;
pub mod errors; // Typed error taxonomy
pub mod helpers;
pub mod http;
pub mod inputs;
pub mod logger;
pub mod pricing;
pub mod proxy;
pub mod report;
pub mod rpc;
pub mod run;
pub mod wallet; // Per-wallet balance collection

pub use errors::{CheckerError, CheckerResult};
