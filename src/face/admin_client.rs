use bytes::Bytes;
use reqwest::Client;
use serde_json::json;

use super::error::FaceApiError;
use super::models::{
    AddedFace, CreatedPerson, DetectionModel, Person, RecognitionModel, TrainingStatus,
};
use super::{into_api_result, SUBSCRIPTION_KEY_HEADER};

/// Administration client for the remote face service: person groups,
/// persons, persisted faces and training.
#[derive(Debug, Clone)]
pub struct FaceAdminClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl FaceAdminClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/face/v1.0/{}", self.endpoint, path)
    }

    /// Create an empty person group bound to a recognition model.
    ///
    /// The id must already be normalized; the service only accepts lowercase
    /// alphanumeric ids with `-` or `_`. Creating a group that exists fails
    /// with a conflict the caller can classify via
    /// [`FaceApiError::is_conflict`].
    pub async fn create_group(
        &self,
        group_id: &str,
        name: &str,
        recognition_model: RecognitionModel,
    ) -> Result<(), FaceApiError> {
        let body = json!({
            "name": name,
            "recognitionModel": recognition_model.as_str(),
        });
        let response = self
            .client
            .put(self.url(&format!("largepersongroups/{group_id}")))
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        into_api_result(response).await?;
        Ok(())
    }

    /// List the persons enrolled in a group.
    pub async fn list_persons(&self, group_id: &str) -> Result<Vec<Person>, FaceApiError> {
        let response = self
            .client
            .get(self.url(&format!("largepersongroups/{group_id}/persons")))
            .query(&[("top", "1000")])
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        Ok(into_api_result(response).await?.json().await?)
    }

    /// Register a new person under a group; the service assigns the id.
    pub async fn create_person(
        &self,
        group_id: &str,
        name: &str,
    ) -> Result<CreatedPerson, FaceApiError> {
        let response = self
            .client
            .post(self.url(&format!("largepersongroups/{group_id}/persons")))
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&json!({ "name": name }))
            .send()
            .await?;
        Ok(into_api_result(response).await?.json().await?)
    }

    /// Delete a person and every face attached to it.
    pub async fn delete_person(&self, group_id: &str, person_id: &str) -> Result<(), FaceApiError> {
        let response = self
            .client
            .delete(self.url(&format!("largepersongroups/{group_id}/persons/{person_id}")))
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        into_api_result(response).await?;
        Ok(())
    }

    /// Attach an image to a person as a persisted face sample.
    pub async fn add_face(
        &self,
        group_id: &str,
        person_id: &str,
        image: Bytes,
        detection_model: DetectionModel,
    ) -> Result<AddedFace, FaceApiError> {
        let response = self
            .client
            .post(self.url(&format!(
                "largepersongroups/{group_id}/persons/{person_id}/persistedfaces"
            )))
            .query(&[("detectionModel", detection_model.as_str())])
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(image)
            .send()
            .await?;
        Ok(into_api_result(response).await?.json().await?)
    }

    /// Submit asynchronous training of a group. Returns once the service has
    /// accepted the job; progress is observed via [`Self::training_status`].
    pub async fn train(&self, group_id: &str) -> Result<(), FaceApiError> {
        let response = self
            .client
            .post(self.url(&format!("largepersongroups/{group_id}/train")))
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        into_api_result(response).await?;
        Ok(())
    }

    /// Fetch the status of the latest training job of a group.
    pub async fn training_status(&self, group_id: &str) -> Result<TrainingStatus, FaceApiError> {
        let response = self
            .client
            .get(self.url(&format!("largepersongroups/{group_id}/training")))
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        Ok(into_api_result(response).await?.json().await?)
    }
}
