use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the remote face service.
#[derive(Debug, Error)]
pub enum FaceApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("face API error ({status}) {code}: {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },
}

impl FaceApiError {
    /// True when the service rejected the call because the resource already
    /// exists. Callers use this to distinguish an idempotent-create race
    /// from auth or transport faults.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::CONFLICT)
    }
}
