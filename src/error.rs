use thiserror::Error;

/// Failure of a call against the external school API.
///
/// There is no retry and no rollback: the error is logged where it happens
/// and propagated so the user can try again.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid response")]
    InvalidResponse,
}
