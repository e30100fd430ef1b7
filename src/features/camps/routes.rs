use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::camps::handlers;
use crate::features::camps::services::CampService;

/// Camp browsing (no authentication required)
pub fn public_routes(service: Arc<CampService>) -> Router {
    Router::new()
        .route("/api/camps", get(handlers::list_camps))
        .route("/api/camps/suggestions", get(handlers::camp_suggestions))
        .route("/api/camps/notifications", get(handlers::camp_notifications))
        .route("/api/camps/{id}", get(handlers::get_camp))
        .with_state(service)
}

/// Camp administration (require JWT authentication)
pub fn protected_routes(service: Arc<CampService>) -> Router {
    Router::new()
        .route("/api/camps", post(handlers::create_camp))
        .route("/api/admin/camps", get(handlers::list_my_camps))
        .route(
            "/api/admin/camps/{id}",
            put(handlers::update_camp).delete(handlers::delete_camp),
        )
        .with_state(service)
}
