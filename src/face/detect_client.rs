use bytes::Bytes;
use reqwest::Client;

use super::error::FaceApiError;
use super::models::{DetectedFace, DetectionModel, RecognitionModel};
use super::{into_api_result, SUBSCRIPTION_KEY_HEADER};

/// Detection client for the remote face service.
#[derive(Debug, Clone)]
pub struct FaceClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl FaceClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    /// Detect faces in a raw image, requesting face ids and the
    /// quality-for-recognition attribute.
    pub async fn detect(
        &self,
        image: Bytes,
        detection_model: DetectionModel,
        recognition_model: RecognitionModel,
    ) -> Result<Vec<DetectedFace>, FaceApiError> {
        let response = self
            .client
            .post(format!("{}/face/v1.0/detect", self.endpoint))
            .query(&[
                ("returnFaceId", "true"),
                ("returnFaceAttributes", "qualityForRecognition"),
                ("detectionModel", detection_model.as_str()),
                ("recognitionModel", recognition_model.as_str()),
            ])
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(image)
            .send()
            .await?;
        Ok(into_api_result(response).await?.json().await?)
    }
}
