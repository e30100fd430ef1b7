use std::sync::Arc;

use axum::{routing::get, Router};

use super::handler;
use super::service::EmergencyService;

/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<EmergencyService>) -> Router {
    Router::new()
        .route("/api/emergency/nearby", get(handler::nearby_places))
        .route("/api/emergency/sos", get(handler::sos))
        .with_state(service)
}
