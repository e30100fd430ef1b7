use axum::{routing::get, Router};

use crate::features::districts::handler;

/// Note: This feature is public (no authentication required)
pub fn routes() -> Router {
    Router::new().route("/api/districts", get(handler::list_districts))
}
