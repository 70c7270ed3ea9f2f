//! API Router
//!
//! Combines the endpoint routers from the feature modules into a unified
//! router. This provides a centralized configuration for all REST routes.

use axum::Router;
use std::sync::Arc;

use crate::shared::state::AppState;

/// Configure all API routes from all modules
pub fn configure_api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // ===== Student Enrollment (enrollment module) =====
        .merge(crate::enrollment::configure())
}
