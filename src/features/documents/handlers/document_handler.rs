use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::IntoParams;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::documents::dtos::{DocumentResponseDto, UploadDocumentDto};
use crate::features::documents::models::DocumentKind;
use crate::features::documents::services::{DocumentService, IncomingFile};
use crate::shared::types::ApiResponse;

/// Upload a document
///
/// Accepts multipart/form-data with:
/// - `file`: PDF or image (required)
/// - `kind`: `medical_report` or `noc_certificate` (required)
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "documents",
    request_body(
        content = UploadDocumentDto,
        content_type = "multipart/form-data",
        description = "Document file and its kind",
    ),
    responses(
        (status = 201, description = "Document uploaded", body = ApiResponse<DocumentResponseDto>),
        (status = 400, description = "Invalid file or kind"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_document(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponseDto>>), AppError> {
    let mut file: Option<IncomingFile> = None;
    let mut kind: Option<DocumentKind> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file = Some(IncomingFile {
                    data: data.to_vec(),
                    file_name,
                    content_type,
                });
            }
            "kind" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read kind field: {}", e))
                })?;
                kind = Some(text.parse().map_err(AppError::BadRequest)?);
            }
            _ => debug!("Ignoring unknown field: {}", field_name),
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let kind = kind.ok_or_else(|| AppError::BadRequest("Document kind is required".to_string()))?;

    let response = service.upload(&user.account_id, kind, file).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DocumentListQuery {
    /// Only documents of this kind
    pub kind: Option<DocumentKind>,
}

/// The caller's documents with fresh download URLs
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "Documents", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_documents(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<ApiResponse<Vec<DocumentResponseDto>>>, AppError> {
    let documents = service.list(&user.account_id, query.kind).await?;
    Ok(Json(ApiResponse::list(documents)))
}

/// Delete a document
///
/// Only the uploader can delete it.
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "documents",
    params(
        ("id" = String, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "Document deleted"),
        (status = 403, description = "Not the uploader"),
        (status = 404, description = "Document not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_document(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    service.delete(&user.account_id, &id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Document deleted".to_string()),
        None,
    )))
}
