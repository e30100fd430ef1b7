use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::camp_directory::dtos::{DirectoryListDto, DirectoryQuery};
use crate::features::camp_directory::{DirectoryService, GovtCamp};
use crate::shared::types::{ApiResponse, Meta};

/// List government camps with optional filters
///
/// Filters compose with AND and keep the stored order. Population and
/// distance values that are not numeric compare as `0`.
#[utoipa::path(
    get,
    path = "/api/govt-camps",
    params(DirectoryQuery),
    responses(
        (status = 200, description = "Filtered government camps", body = ApiResponse<DirectoryListDto>),
        (status = 400, description = "Invalid filter"),
        (status = 502, description = "Camps could not be fetched; retry")
    ),
    tag = "govt-camps"
)]
pub async fn list_govt_camps(
    State(service): State<Arc<DirectoryService>>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<ApiResponse<DirectoryListDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.list(query.into()).await?;
    let meta = Meta::total(result.camps.len());
    Ok(Json(ApiResponse::success(Some(result), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/govt-camps/{id}",
    params(
        ("id" = String, Path, description = "Government camp id")
    ),
    responses(
        (status = 200, description = "Government camp", body = ApiResponse<GovtCamp>),
        (status = 404, description = "Camp not found")
    ),
    tag = "govt-camps"
)]
pub async fn get_govt_camp(
    State(service): State<Arc<DirectoryService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<GovtCamp>>> {
    let camp = service.open(&id).await?;
    Ok(Json(ApiResponse::success(Some(camp), None, None)))
}
