use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors surfaced by an update check. Feed failures are absorbed into a
/// "no update" result, so only cancellation reaches the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("Update check cancelled")]
    Cancelled,
}
