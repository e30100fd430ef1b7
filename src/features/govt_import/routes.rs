use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::govt_import::handlers;
use crate::features::govt_import::services::GovtImportService;

/// Note: These routes require JWT authentication
pub fn routes(service: Arc<GovtImportService>) -> Router {
    Router::new()
        .route(
            "/api/admin/govt-camps/import",
            post(handlers::import_schedule),
        )
        .with_state(service)
}
