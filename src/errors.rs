/// Error types shared across the checker
///
/// Library code returns `CheckerError`; the binary and the run orchestrator
/// wrap it in `anyhow` with context where a failure is fatal.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    /// Transport failure: connect, timeout, TLS, proxy refused
    #[error("Network error on {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Rate limit exceeded on {endpoint}")]
    RateLimited { endpoint: String },

    #[error("RPC error in {method} (code {code}): {message}")]
    Rpc {
        method: String,
        code: i64,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid proxy '{line}': {reason}")]
    InvalidProxy { line: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckerError {
    /// Map a reqwest failure onto the checker taxonomy
    pub fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(endpoint, status.as_u16());
        }
        if err.is_decode() {
            return CheckerError::InvalidResponse(err.to_string());
        }
        CheckerError::Network {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }

    /// Build the error for a non-success HTTP status
    pub fn from_status(endpoint: &str, status: u16) -> Self {
        if status == 429 {
            CheckerError::RateLimited {
                endpoint: endpoint.to_string(),
            }
        } else {
            CheckerError::HttpStatus {
                endpoint: endpoint.to_string(),
                status,
            }
        }
    }

    /// Whether another attempt of the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CheckerError::Network { .. } | CheckerError::RateLimited { .. }
        )
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CheckerError::RateLimited { .. })
    }

    /// Transport-level failure, the kind a different proxy could fix
    pub fn is_network(&self) -> bool {
        matches!(self, CheckerError::Network { .. })
    }
}

pub type CheckerResult<T> = Result<T, CheckerError>;
