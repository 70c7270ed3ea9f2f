use crate::config::AppConfig;
use crate::face::{FaceAdminClient, FaceClient};

/// Shared application state handed to every handler.
///
/// The two remote-service clients are built once at startup from the loaded
/// configuration and reused across requests; they hold no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub face_admin: FaceAdminClient,
    pub face: FaceClient,
}
