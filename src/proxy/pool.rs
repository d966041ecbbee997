/// Rotation over the working proxies
use super::endpoint::ProxyEndpoint;
use crate::http::Route;

#[derive(Debug, Clone, Default)]
pub struct ProxyPool {
    proxies: Vec<ProxyEndpoint>,
}

impl ProxyPool {
    pub fn new(proxies: Vec<ProxyEndpoint>) -> Self {
        Self { proxies }
    }

    /// Pool that routes everything directly
    pub fn direct() -> Self {
        Self::default()
    }

    /// Every route in pool order, or just the direct route for an empty pool
    pub fn routes(&self) -> Vec<Route> {
        if self.proxies.is_empty() {
            return vec![Route::Direct];
        }
        self.proxies.iter().cloned().map(Route::Proxy).collect()
    }

    /// Routes for the wallet at 1-based `index`
    ///
    /// Starts at `(index - 1) % n` so consecutive wallets spread over the pool,
    /// then wraps around; each route appears exactly once.
    pub fn rotation(&self, index: usize) -> Vec<Route> {
        let routes = self.routes();
        let start = index.saturating_sub(1) % routes.len();
        routes[start..]
            .iter()
            .chain(routes[..start].iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> ProxyPool {
        ProxyPool::new(
            (0..n)
                .map(|i| ProxyEndpoint::parse(&format!("10.0.0.{}:8080", i + 1)).unwrap())
                .collect(),
        )
    }

    fn hosts(routes: &[Route]) -> Vec<String> {
        routes
            .iter()
            .map(|r| match r {
                Route::Direct => "direct".to_string(),
                Route::Proxy(p) => p.host().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_pool_is_direct() {
        let pool = ProxyPool::direct();
        assert_eq!(pool.rotation(1), vec![Route::Direct]);
        assert_eq!(pool.rotation(7), vec![Route::Direct]);
    }

    #[test]
    fn test_rotation_start_and_wrap() {
        let pool = pool(3);
        assert_eq!(hosts(&pool.rotation(1)), vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        assert_eq!(hosts(&pool.rotation(2)), vec!["10.0.0.2", "10.0.0.3", "10.0.0.1"]);
        assert_eq!(hosts(&pool.rotation(6)), vec!["10.0.0.3", "10.0.0.1", "10.0.0.2"]);
    }
}
