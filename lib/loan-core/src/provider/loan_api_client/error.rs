use thiserror::Error;

/// Normalized failure of a remote call, independent of the transport.
#[derive(Debug, Error)]
pub enum LoanApiClientError {
    #[error("Unauthorized: missing or expired session")]
    Unauthorized,
    #[error("Not found")]
    NotFound,
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },
    #[error("Transport error: {0}")]
    Transport(anyhow::Error),
}

impl LoanApiClientError {
    /// Failures worth another attempt for read-only requests
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LoanApiClientError::NetworkError(_) | LoanApiClientError::ServerError { .. }
        )
    }
}
