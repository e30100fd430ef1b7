use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireOrgAdmin;
use crate::features::govt_import::dtos::{ImportScheduleDto, ImportSummaryDto};
use crate::features::govt_import::services::GovtImportService;
use crate::shared::types::ApiResponse;

/// Import a pasted government camp schedule
///
/// Rows that cannot be read are skipped and reported by line number.
#[utoipa::path(
    post,
    path = "/api/admin/govt-camps/import",
    request_body = ImportScheduleDto,
    responses(
        (status = 201, description = "Rows imported", body = ApiResponse<ImportSummaryDto>),
        (status = 400, description = "Validation error or no readable rows"),
        (status = 403, description = "Organization admin access required")
    ),
    tag = "govt-camps",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn import_schedule(
    RequireOrgAdmin(user): RequireOrgAdmin,
    State(service): State<Arc<GovtImportService>>,
    AppJson(dto): AppJson<ImportScheduleDto>,
) -> Result<(StatusCode, Json<ApiResponse<ImportSummaryDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("Schedule import for {} by {}", dto.district, user.account_id);
    let summary = service.import(dto).await?;
    let message = format!("Imported {} camps", summary.imported);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(summary), Some(message), None)),
    ))
}
