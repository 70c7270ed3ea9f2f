//! Clients for the remote face-recognition service.
//!
//! The service exposes an administration surface (person groups, persons,
//! persisted faces, training) and a detection surface. Both are consumed
//! here as thin HTTP clients; no detection or matching happens locally.

pub mod admin_client;
pub mod detect_client;
pub mod error;
pub mod models;

pub use admin_client::FaceAdminClient;
pub use detect_client::FaceClient;
pub use error::FaceApiError;

/// Header carrying the service credential on every call.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Turn a non-2xx response into a structured [`FaceApiError`], decoding the
/// service's `{"error": {"code", "message"}}` envelope when present.
async fn into_api_result(response: reqwest::Response) -> Result<reqwest::Response, FaceApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<models::ApiErrorEnvelope>(&text) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => ("Unknown".to_string(), text),
    };
    Err(FaceApiError::Api {
        status,
        code,
        message,
    })
}
