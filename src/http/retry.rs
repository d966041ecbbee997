/// Bounded retry for a single request
use crate::config::RetryConfig;
use crate::errors::{CheckerError, CheckerResult};
use crate::logger::{self, LogTag};
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
    pub rate_limit_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: Duration::from_secs(config.delay_secs),
            rate_limit_backoff: Duration::from_secs(config.rate_limit_backoff_secs),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no waiting
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
            rate_limit_backoff: Duration::ZERO,
        }
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// attempts run out. Every failed attempt is logged under `tag`.
pub async fn with_retries<T, F, Fut>(
    policy: &RetryPolicy,
    tag: LogTag,
    label: &str,
    op: F,
) -> CheckerResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CheckerResult<T>>,
{
    retry_while(policy, tag, label, op, CheckerError::is_retryable).await
}

/// Like [`with_retries`], but every failure is retried until the attempts
/// run out. 429 still waits the rate-limit backoff.
pub async fn with_retries_any<T, F, Fut>(
    policy: &RetryPolicy,
    tag: LogTag,
    label: &str,
    op: F,
) -> CheckerResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CheckerResult<T>>,
{
    retry_while(policy, tag, label, op, |_| true).await
}

async fn retry_while<T, F, Fut>(
    policy: &RetryPolicy,
    tag: LogTag,
    label: &str,
    mut op: F,
    retry_on: fn(&CheckerError) -> bool,
) -> CheckerResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CheckerResult<T>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                logger::error(
                    tag,
                    &format!(
                        "{} failed (attempt {}/{}): {}",
                        label, attempt, policy.max_attempts, e
                    ),
                );

                if !retry_on(&e) || attempt >= policy.max_attempts {
                    return Err(e);
                }

                let wait = if e.is_rate_limited() {
                    logger::warning(
                        tag,
                        &format!(
                            "Rate limited, retrying in {} seconds",
                            policy.rate_limit_backoff.as_secs()
                        ),
                    );
                    policy.rate_limit_backoff
                } else {
                    policy.delay
                };
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}
