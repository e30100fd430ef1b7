use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireOrgAdmin;
use crate::features::camps::dtos::{
    CampListQuery, CampNotificationDto, CampRequestDto, CampResponseDto, NotificationQuery,
    SuggestionQuery,
};
use crate::features::camps::services::CampService;
use crate::shared::types::ApiResponse;

/// Create a camp owned by the caller
#[utoipa::path(
    post,
    path = "/api/camps",
    request_body = CampRequestDto,
    responses(
        (status = 201, description = "Camp created", body = ApiResponse<CampResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "camps",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_camp(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<CampService>>,
    AppJson(dto): AppJson<CampRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<CampResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let camp = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(camp),
            Some("Camp created".to_string()),
            None,
        )),
    ))
}

/// List camps
///
/// The date range applies only when both `date_from` and `date_to` are given.
#[utoipa::path(
    get,
    path = "/api/camps",
    params(CampListQuery),
    responses(
        (status = 200, description = "Camps", body = ApiResponse<Vec<CampResponseDto>>),
        (status = 400, description = "Unknown location")
    ),
    tag = "camps"
)]
pub async fn list_camps(
    State(service): State<Arc<CampService>>,
    Query(query): Query<CampListQuery>,
) -> Result<Json<ApiResponse<Vec<CampResponseDto>>>> {
    let camps = service.list(query).await?;
    Ok(Json(ApiResponse::list(camps)))
}

#[utoipa::path(
    get,
    path = "/api/camps/suggestions",
    params(SuggestionQuery),
    responses(
        (status = 200, description = "Distinct matching values", body = ApiResponse<Vec<String>>)
    ),
    tag = "camps"
)]
pub async fn camp_suggestions(
    State(service): State<Arc<CampService>>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let values = service.suggestions(query.field, &query.q).await?;
    Ok(Json(ApiResponse::list(values)))
}

/// Whether any camp is scheduled in the given district
#[utoipa::path(
    get,
    path = "/api/camps/notifications",
    params(NotificationQuery),
    responses(
        (status = 200, description = "Notification state", body = ApiResponse<CampNotificationDto>),
        (status = 400, description = "Unknown locality")
    ),
    tag = "camps"
)]
pub async fn camp_notifications(
    State(service): State<Arc<CampService>>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<ApiResponse<CampNotificationDto>>> {
    let notification = service.notifications(&query.locality).await?;
    Ok(Json(ApiResponse::success(Some(notification), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/camps/{id}",
    params(
        ("id" = String, Path, description = "Camp id")
    ),
    responses(
        (status = 200, description = "Camp", body = ApiResponse<CampResponseDto>),
        (status = 404, description = "Camp not found")
    ),
    tag = "camps"
)]
pub async fn get_camp(
    State(service): State<Arc<CampService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CampResponseDto>>> {
    let camp = service.get(&id).await?;
    Ok(Json(ApiResponse::success(Some(camp), None, None)))
}

/// Camps created by the caller
#[utoipa::path(
    get,
    path = "/api/admin/camps",
    responses(
        (status = 200, description = "Owned camps", body = ApiResponse<Vec<CampResponseDto>>),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "camps",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_my_camps(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<CampService>>,
) -> Result<Json<ApiResponse<Vec<CampResponseDto>>>> {
    let camps = service.list_owned(&user).await?;
    Ok(Json(ApiResponse::list(camps)))
}

#[utoipa::path(
    put,
    path = "/api/admin/camps/{id}",
    params(
        ("id" = String, Path, description = "Camp id")
    ),
    request_body = CampRequestDto,
    responses(
        (status = 200, description = "Camp updated", body = ApiResponse<CampResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the camp's creator"),
        (status = 404, description = "Camp not found")
    ),
    tag = "camps",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_camp(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<CampService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<CampRequestDto>,
) -> Result<Json<ApiResponse<CampResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let camp = service.update(&user, &id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(camp),
        Some("Camp updated".to_string()),
        None,
    )))
}

/// Delete a camp
///
/// Registrations, complaints and feedback that reference the camp are kept.
#[utoipa::path(
    delete,
    path = "/api/admin/camps/{id}",
    params(
        ("id" = String, Path, description = "Camp id")
    ),
    responses(
        (status = 200, description = "Camp deleted"),
        (status = 403, description = "Not the camp's creator"),
        (status = 404, description = "Camp not found")
    ),
    tag = "camps",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_camp(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<CampService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&user, &id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Camp deleted".to_string()),
        None,
    )))
}
