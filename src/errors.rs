use reqwest::StatusCode;
use thiserror::Error;

/// Failures on the generate path. All of these propagate to `main`, get
/// logged, and turn into a non-zero exit code. The serve path never raises
/// them: cache-read problems degrade to an empty snapshot instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("MENU_API environment variable is required to fetch meal data")]
    MissingApiKey,
    #[error("meal service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("meal service request failed with status {0}")]
    BadStatus(StatusCode),
    #[error("malformed meal service response: {0}")]
    Protocol(String),
    #[error("meal service error {code}: {message}")]
    Service { code: String, message: String },
    #[error("failed to write menu cache: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode menu cache: {0}")]
    Json(#[from] serde_json::Error),
}
