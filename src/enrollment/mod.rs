//! Student face enrollment.
//!
//! One endpoint orchestrates the remote face service: ensure the class
//! person group exists, resolve the student's person record, gate the image
//! on detection and quality, attach the face, then train the group.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    routing::post,
    Router,
};
use log::{error, info, warn};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;

use crate::face::models::{
    DetectedFace, DetectionModel, QualityForRecognition, RecognitionModel, TrainingState,
};
use crate::face::FaceApiError;
use crate::shared::state::AppState;

/// The remote service rejects images larger than 6 MB.
const MAX_IMAGE_BYTES: usize = 6 * 1024 * 1024;

const DETECTION_MODEL: DetectionModel = DetectionModel::Detection03;
const RECOGNITION_MODEL: RecognitionModel = RecognitionModel::Recognition04;

pub fn configure() -> Router<Arc<AppState>> {
    Router::new()
        .route("/enrollStudent", post(enroll_student))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES))
}

#[derive(Debug, Deserialize)]
pub struct EnrollParams {
    pub student_id: String,
    pub cur_class: String,
}

#[derive(Debug, Error)]
enum EnrollError {
    #[error("No image provided")]
    NoImage,
    #[error("No faces in the image")]
    NoFaces,
    #[error("Only one face is allowed")]
    MultipleFaces,
    #[error("Image quality not sufficient")]
    InsufficientQuality,
    #[error("Error: {0}")]
    Api(#[from] FaceApiError),
    #[error("Error: {0}")]
    Training(String),
}

/// `POST /enrollStudent?student_id=<id>&cur_class=<group>` with a raw image
/// body. Responds with plain text: `200` once the group finished training,
/// `400` with the rejection reason otherwise.
pub async fn enroll_student(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EnrollParams>,
    body: Bytes,
) -> (StatusCode, String) {
    info!("Received image upload request");
    match enroll(&state, &params, body).await {
        Ok(message) => (StatusCode::OK, message.to_string()),
        Err(err) => {
            error!("Enrollment failed: {}", err);
            (StatusCode::BAD_REQUEST, err.to_string())
        }
    }
}

async fn enroll(
    state: &AppState,
    params: &EnrollParams,
    image: Bytes,
) -> Result<&'static str, EnrollError> {
    if image.is_empty() {
        return Err(EnrollError::NoImage);
    }

    // The remote service only accepts lowercase group ids; person names
    // follow the same normalization so lookups stay case-insensitive.
    let student_id = params.student_id.to_lowercase();
    let group_id = params.cur_class.to_lowercase();
    info!("student_id = {}, person group = {}", student_id, group_id);

    ensure_group(state, &group_id).await?;

    let (person_id, created_here) = find_or_create_person(state, &group_id, &student_id).await?;

    if let Err(err) = attach_face(state, &group_id, &person_id, image).await {
        // A person created by this request must not outlive a rejected
        // enrollment; a pre-existing person is left untouched.
        if created_here {
            if let Err(del_err) = state.face_admin.delete_person(&group_id, &person_id).await {
                warn!(
                    "Failed to delete person {} after rejected enrollment: {}",
                    person_id, del_err
                );
            }
        }
        return Err(err);
    }

    train_group(state, &group_id).await?;
    Ok("training completed")
}

/// Idempotent group creation: only the "already exists" conflict is
/// swallowed, anything else (auth, quota, transport) propagates.
async fn ensure_group(state: &AppState, group_id: &str) -> Result<(), EnrollError> {
    match state
        .face_admin
        .create_group(group_id, group_id, RECOGNITION_MODEL)
        .await
    {
        Ok(()) => info!("Created person group {}", group_id),
        Err(err) if err.is_conflict() => {
            info!("Person group {} already exists", group_id);
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Resolve the student's person record, reusing an existing one so repeated
/// enrollment for the same (group, student) pair does not pile up
/// duplicates. Returns the person id and whether it was created here.
async fn find_or_create_person(
    state: &AppState,
    group_id: &str,
    student_id: &str,
) -> Result<(String, bool), EnrollError> {
    let persons = state.face_admin.list_persons(group_id).await?;
    if let Some(existing) = persons.into_iter().find(|p| p.name == student_id) {
        info!(
            "Reusing person {} for student {}",
            existing.person_id, student_id
        );
        return Ok((existing.person_id, false));
    }

    let created = state.face_admin.create_person(group_id, student_id).await?;
    info!("Created person {} for student {}", created.person_id, student_id);
    Ok((created.person_id, true))
}

/// Detect faces in the image, gate on count and quality, then persist the
/// face sample on the person record.
async fn attach_face(
    state: &AppState,
    group_id: &str,
    person_id: &str,
    image: Bytes,
) -> Result<(), EnrollError> {
    let faces = state
        .face
        .detect(image.clone(), DETECTION_MODEL, RECOGNITION_MODEL)
        .await?;
    let face = validate_detection(&faces)?;

    let added = state
        .face_admin
        .add_face(group_id, person_id, image, DETECTION_MODEL)
        .await?;
    info!(
        "Face {} persisted as {} on person {}",
        face.face_id.as_deref().unwrap_or("<no id>"),
        added.persisted_face_id,
        person_id
    );
    Ok(())
}

/// Exactly one face, and that face good enough for recognition. A missing
/// quality attribute counts as insufficient.
fn validate_detection(faces: &[DetectedFace]) -> Result<&DetectedFace, EnrollError> {
    let face = match faces {
        [] => return Err(EnrollError::NoFaces),
        [face] => face,
        _ => return Err(EnrollError::MultipleFaces),
    };

    let quality = face
        .face_attributes
        .as_ref()
        .and_then(|attrs| attrs.quality_for_recognition);
    if quality != Some(QualityForRecognition::High) {
        return Err(EnrollError::InsufficientQuality);
    }
    Ok(face)
}

/// Submit training for the group and poll its status until a terminal
/// state. A `200` response therefore means training actually finished, not
/// merely started.
async fn train_group(state: &AppState, group_id: &str) -> Result<(), EnrollError> {
    info!("Training person group {}", group_id);
    state.face_admin.train(group_id).await?;

    let deadline = Instant::now() + state.config.face.training_wait;
    loop {
        tokio::time::sleep(state.config.face.training_poll_interval).await;

        let status = state.face_admin.training_status(group_id).await?;
        match status.status {
            TrainingState::Succeeded => {
                info!("Training completed for person group {}", group_id);
                return Ok(());
            }
            TrainingState::Failed => {
                return Err(EnrollError::Training(format!(
                    "training failed for group {}: {}",
                    group_id,
                    status.message.unwrap_or_default()
                )));
            }
            TrainingState::NotStarted | TrainingState::Running => {
                if Instant::now() >= deadline {
                    return Err(EnrollError::Training(format!(
                        "training for group {} did not finish within {}s",
                        group_id,
                        state.config.face.training_wait.as_secs()
                    )));
                }
            }
        }
    }
}
