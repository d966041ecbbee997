//! Proxy support
//!
//! - Parsing of the proxies file
//! - Health checking with bounded retries
//! - Per-wallet rotation with failover

pub mod endpoint;
pub mod health;
pub mod pool;

pub use endpoint::{parse_proxy_lines, ProxyEndpoint};
pub use health::{check_proxies, HealthReport, HttpProxyProbe, ProxyProbe};
pub use pool::ProxyPool;
