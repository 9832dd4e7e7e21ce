use thiserror::Error;

/// Why a lookup request failed to settle with a usable body. The UI only
/// ever shows the fixed per-mode message; the cause here is for the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
