use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::documents::models::DocumentKind;

/// Upload form for OpenAPI documentation only; the handler reads multipart directly
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentDto {
    /// PDF or image file
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// `medical_report` or `noc_certificate`
    #[schema(example = "medical_report")]
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponseDto {
    pub id: String,
    pub kind: DocumentKind,
    pub original_filename: String,
    pub content_type: String,
    pub file_size: i64,
    /// Presigned, time-limited download URL
    pub url: String,
    pub created_at: DateTime<Utc>,
}

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/webp",
];

pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

pub fn get_extension_from_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "application/pdf" => Some("pdf"),
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}
