use std::sync::Arc;

use axum::{routing::get, Router};

use super::handler;
use super::service::ScraperService;

pub fn routes(service: Arc<ScraperService>) -> Router {
    Router::new()
        .route("/scrape", get(handler::scrape))
        .with_state(service)
}
