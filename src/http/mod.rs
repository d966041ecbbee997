//! HTTP transport: per-route clients and retry policy

pub mod client;
pub mod retry;

pub use client::{HttpRouter, Route};
pub use retry::{with_retries, with_retries_any, RetryPolicy};

use crate::errors::{CheckerError, CheckerResult};

/// Fail on non-success statuses, mapping 429 to `RateLimited`
pub fn check_status(endpoint: &str, response: reqwest::Response) -> CheckerResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CheckerError::from_status(endpoint, status.as_u16()))
    }
}
