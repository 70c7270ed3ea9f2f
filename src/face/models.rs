//! Wire types mirroring the remote face service's JSON surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detection model used when locating faces in an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionModel {
    Detection01,
    Detection02,
    Detection03,
}

impl DetectionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detection01 => "detection_01",
            Self::Detection02 => "detection_02",
            Self::Detection03 => "detection_03",
        }
    }
}

/// Recognition model a person group (and its detections) are bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionModel {
    Recognition03,
    Recognition04,
}

impl RecognitionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recognition03 => "recognition_03",
            Self::Recognition04 => "recognition_04",
        }
    }
}

/// Service-computed classification of whether a face image is sharp, clear
/// and frontal enough for reliable matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityForRecognition {
    Low,
    Medium,
    High,
}

/// One face found by the detection endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFace {
    pub face_id: Option<String>,
    pub face_rectangle: FaceRectangle,
    #[serde(default)]
    pub face_attributes: Option<FaceAttributes>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FaceRectangle {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAttributes {
    #[serde(default)]
    pub quality_for_recognition: Option<QualityForRecognition>,
}

/// A person enrolled in a person group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: String,
    pub name: String,
    #[serde(default)]
    pub user_data: Option<String>,
    #[serde(default)]
    pub persisted_face_ids: Option<Vec<String>>,
}

/// Response of a person-create call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPerson {
    pub person_id: String,
}

/// Response of a face-add call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedFace {
    pub persisted_face_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TrainingState {
    #[serde(rename = "notstarted")]
    NotStarted,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "succeeded")]
    Succeeded,
    #[serde(rename = "failed")]
    Failed,
}

/// Status of the asynchronous training operation of a person group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatus {
    pub status: TrainingState,
    #[serde(default)]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_action_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_successful_training_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error envelope the service wraps non-2xx responses in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
