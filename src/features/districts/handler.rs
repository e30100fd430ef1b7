use axum::{extract::Query, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::features::districts::District;
use crate::shared::types::ApiResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListDistrictsQuery {
    /// Case-insensitive substring of the district name
    pub q: Option<String>,
}

/// List districts in alphabetical order
#[utoipa::path(
    get,
    path = "/api/districts",
    params(ListDistrictsQuery),
    responses(
        (status = 200, description = "Districts", body = ApiResponse<Vec<District>>),
    ),
    tag = "districts"
)]
pub async fn list_districts(
    Query(query): Query<ListDistrictsQuery>,
) -> Json<ApiResponse<Vec<District>>> {
    let needle = query
        .q
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    let districts = District::ALL
        .iter()
        .copied()
        .filter(|d| {
            needle
                .as_deref()
                .is_none_or(|n| d.name().to_lowercase().contains(n))
        })
        .collect();

    Json(ApiResponse::list(districts))
}
