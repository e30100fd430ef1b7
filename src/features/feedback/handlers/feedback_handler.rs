use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireOrgAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::feedback::dtos::{
    AdminOverviewDto, CampMessageResponseDto, SubmitMessageDto,
};
use crate::features::feedback::models::MessageKind;
use crate::features::feedback::services::FeedbackService;
use crate::shared::types::ApiResponse;

async fn submit(
    service: &FeedbackService,
    kind: MessageKind,
    camp_id: &str,
    dto: SubmitMessageDto,
) -> Result<(StatusCode, Json<ApiResponse<CampMessageResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.submit(kind, camp_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(message),
            Some(format!("{} submitted successfully", kind.label())),
            None,
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/camps/{id}/complaints",
    params(
        ("id" = String, Path, description = "Camp id")
    ),
    request_body = SubmitMessageDto,
    responses(
        (status = 201, description = "Complaint submitted", body = ApiResponse<CampMessageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Camp not found")
    ),
    tag = "feedback",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn submit_complaint(
    _user: AuthenticatedUser,
    State(service): State<Arc<FeedbackService>>,
    Path(camp_id): Path<String>,
    AppJson(dto): AppJson<SubmitMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<CampMessageResponseDto>>)> {
    submit(&service, MessageKind::Complaint, &camp_id, dto).await
}

#[utoipa::path(
    post,
    path = "/api/camps/{id}/feedbacks",
    params(
        ("id" = String, Path, description = "Camp id")
    ),
    request_body = SubmitMessageDto,
    responses(
        (status = 201, description = "Feedback submitted", body = ApiResponse<CampMessageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Camp not found")
    ),
    tag = "feedback",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn submit_feedback(
    _user: AuthenticatedUser,
    State(service): State<Arc<FeedbackService>>,
    Path(camp_id): Path<String>,
    AppJson(dto): AppJson<SubmitMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<CampMessageResponseDto>>)> {
    submit(&service, MessageKind::Feedback, &camp_id, dto).await
}

#[utoipa::path(
    get,
    path = "/api/admin/complaints",
    responses(
        (status = 200, description = "Complaints about the caller's camps", body = ApiResponse<Vec<CampMessageResponseDto>>),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "feedback",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_complaints(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<FeedbackService>>,
) -> Result<Json<ApiResponse<Vec<CampMessageResponseDto>>>> {
    let complaints = service
        .list_for_admin(MessageKind::Complaint, &user)
        .await?;
    Ok(Json(ApiResponse::list(complaints)))
}

#[utoipa::path(
    get,
    path = "/api/admin/feedbacks",
    responses(
        (status = 200, description = "Feedback about the caller's camps", body = ApiResponse<Vec<CampMessageResponseDto>>),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "feedback",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_feedbacks(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<FeedbackService>>,
) -> Result<Json<ApiResponse<Vec<CampMessageResponseDto>>>> {
    let feedbacks = service.list_for_admin(MessageKind::Feedback, &user).await?;
    Ok(Json(ApiResponse::list(feedbacks)))
}

#[utoipa::path(
    get,
    path = "/api/admin/overview",
    responses(
        (status = 200, description = "Counts for the caller's camps", body = ApiResponse<AdminOverviewDto>),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "feedback",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admin_overview(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<FeedbackService>>,
) -> Result<Json<ApiResponse<AdminOverviewDto>>> {
    let overview = service.overview(&user).await?;
    Ok(Json(ApiResponse::success(Some(overview), None, None)))
}
