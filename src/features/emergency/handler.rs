use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::shared::types::ApiResponse;

use super::dto::{NearbyQuery, PlaceDto, SosDto, SosQuery};
use super::service::EmergencyService;

/// Hospitals or pharmacies around a coordinate, at most ten
#[utoipa::path(
    get,
    path = "/api/emergency/nearby",
    params(NearbyQuery),
    responses(
        (status = 200, description = "Nearby places", body = ApiResponse<Vec<PlaceDto>>),
        (status = 400, description = "Invalid coordinates"),
        (status = 502, description = "Place search failed")
    ),
    tag = "emergency"
)]
pub async fn nearby_places(
    State(service): State<Arc<EmergencyService>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<ApiResponse<Vec<PlaceDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let places = service.nearby(query.lat, query.lon, query.kind).await?;
    Ok(Json(ApiResponse::list(places)))
}

#[utoipa::path(
    get,
    path = "/api/emergency/sos",
    params(SosQuery),
    responses(
        (status = 200, description = "SOS details", body = ApiResponse<SosDto>),
        (status = 400, description = "Invalid coordinates")
    ),
    tag = "emergency"
)]
pub async fn sos(
    State(service): State<Arc<EmergencyService>>,
    Query(query): Query<SosQuery>,
) -> Result<Json<ApiResponse<SosDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        Some(service.sos(query.lat, query.lon)),
        None,
        None,
    )))
}
