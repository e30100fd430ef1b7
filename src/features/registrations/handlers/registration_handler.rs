use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireOrgAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::registrations::dtos::{
    AdminRegistrationsDto, MyRegistrationsDto, RegisterRequestDto, RegistrationResponseDto,
};
use crate::features::registrations::services::RegistrationService;
use crate::shared::types::{ApiResponse, Meta};

#[utoipa::path(
    post,
    path = "/api/camps/{id}/registrations",
    params(
        ("id" = String, Path, description = "Camp id")
    ),
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<RegistrationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Camp not found")
    ),
    tag = "registrations",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn register_for_camp(
    _user: AuthenticatedUser,
    State(service): State<Arc<RegistrationService>>,
    Path(camp_id): Path<String>,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let registration = service.register(&camp_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(registration),
            Some("Registration successful".to_string()),
            None,
        )),
    ))
}

/// Camps the caller registered for, with the verified subset
#[utoipa::path(
    get,
    path = "/api/me/registrations",
    responses(
        (status = 200, description = "Caller's registrations", body = ApiResponse<MyRegistrationsDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn my_registrations(
    user: AuthenticatedUser,
    State(service): State<Arc<RegistrationService>>,
) -> Result<Json<ApiResponse<MyRegistrationsDto>>> {
    let registrations = service.for_user(&user).await?;
    Ok(Json(ApiResponse::success(Some(registrations), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    responses(
        (status = 200, description = "Registrations for the caller's camps", body = ApiResponse<AdminRegistrationsDto>),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "registrations",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_admin_registrations(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<RegistrationService>>,
) -> Result<Json<ApiResponse<AdminRegistrationsDto>>> {
    let overview = service.for_admin(&user).await?;
    let meta = Meta::total(overview.registrations.len());
    Ok(Json(ApiResponse::success(Some(overview), None, Some(meta))))
}

#[utoipa::path(
    patch,
    path = "/api/admin/registrations/{id}/verify",
    params(
        ("id" = String, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Registration verified", body = ApiResponse<RegistrationResponseDto>),
        (status = 403, description = "Not the camp's creator"),
        (status = 404, description = "Registration or camp not found")
    ),
    tag = "registrations",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn verify_registration(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<RegistrationService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RegistrationResponseDto>>> {
    let registration = service.verify(&user, &id).await?;
    Ok(Json(ApiResponse::success(
        Some(registration),
        Some("Registration verified successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/registrations/report.csv",
    responses(
        (status = 200, description = "Per-camp registration report", content_type = "text/csv", body = String),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "registrations",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn registration_report_csv(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<RegistrationService>>,
) -> Result<impl IntoResponse> {
    let csv = service.report_csv(&user).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"camp_reports.csv\"",
            ),
        ],
        csv,
    ))
}
