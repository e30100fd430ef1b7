use std::sync::Arc;

use axum::{extract::State, Json};

use crate::shared::types::ApiResponse;

use super::parser::ScrapedEntry;
use super::service::ScraperService;

/// Refresh the scraped programme information
///
/// Failures are reported in the body with `success: false` and an empty list.
#[utoipa::path(
    get,
    path = "/scrape",
    responses(
        (status = 200, description = "Scraped entries", body = ApiResponse<Vec<ScrapedEntry>>),
    ),
    tag = "scraper"
)]
pub async fn scrape(
    State(service): State<Arc<ScraperService>>,
) -> Json<ApiResponse<Vec<ScrapedEntry>>> {
    match service.scrape().await {
        Ok(entries) => Json(ApiResponse::list(entries)),
        Err(e) => {
            tracing::error!("Scraping failed: {}", e);
            Json(ApiResponse {
                success: false,
                data: Some(Vec::new()),
                message: Some("Scraping failed".to_string()),
                meta: None,
                errors: None,
            })
        }
    }
}
