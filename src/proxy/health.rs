/// Proxy health checking
///
/// Each proxy gets `max_attempts` tries against the check URL, whatever the
/// failure. A proxy that fails every attempt is reported as non-working and
/// logged.
use super::endpoint::ProxyEndpoint;
use crate::errors::{CheckerError, CheckerResult};
use crate::http::{check_status, with_retries_any, HttpRouter, RetryPolicy, Route};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use indicatif::ProgressBar;
use std::sync::Arc;
use std::time::Duration;

/// One reachability probe through a proxy
#[async_trait]
pub trait ProxyProbe: Send + Sync {
    async fn probe(&self, proxy: &ProxyEndpoint) -> CheckerResult<()>;
}

/// Probe that fetches a public IP echo service through the proxy
pub struct HttpProxyProbe {
    router: Arc<HttpRouter>,
    check_url: String,
    timeout: Duration,
}

impl HttpProxyProbe {
    pub fn new(router: Arc<HttpRouter>, check_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            router,
            check_url: check_url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ProxyProbe for HttpProxyProbe {
    async fn probe(&self, proxy: &ProxyEndpoint) -> CheckerResult<()> {
        let client = self.router.client(&Route::Proxy(proxy.clone()))?;
        let response = client
            .get(&self.check_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CheckerError::from_reqwest(&self.check_url, e))?;
        let response = check_status(&self.check_url, response)?;

        let body = response
            .text()
            .await
            .map_err(|e| CheckerError::from_reqwest(&self.check_url, e))?;
        logger::debug(
            LogTag::Proxy,
            &format!("{} answered with exit IP {}", proxy, body.trim()),
        );
        Ok(())
    }
}

/// Outcome of checking the whole proxy list
#[derive(Debug, Clone, Default)]
pub struct HealthReport {
    pub working: Vec<ProxyEndpoint>,
    pub failed: Vec<ProxyEndpoint>,
}

impl HealthReport {
    pub fn all_failed(&self) -> bool {
        self.working.is_empty() && !self.failed.is_empty()
    }
}

/// Check every proxy in order
pub async fn check_proxies(
    probe: &dyn ProxyProbe,
    proxies: &[ProxyEndpoint],
    policy: &RetryPolicy,
    progress: &ProgressBar,
) -> HealthReport {
    let mut report = HealthReport::default();

    for proxy in proxies {
        let label = format!("Proxy {}", proxy);
        match with_retries_any(policy, LogTag::Proxy, &label, || probe.probe(proxy)).await {
            Ok(()) => {
                logger::info(LogTag::Proxy, &format!("Proxy {} is working", proxy));
                report.working.push(proxy.clone());
            }
            Err(e) => {
                logger::warning(
                    LogTag::Proxy,
                    &format!("Proxy {} is not working: {}", proxy, e),
                );
                report.failed.push(proxy.clone());
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if !report.working.is_empty() {
        logger::info(
            LogTag::Proxy,
            &format!("Using {} working proxies", report.working.len()),
        );
    }
    report
}
