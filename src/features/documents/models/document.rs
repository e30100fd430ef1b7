use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    MedicalReport,
    NocCertificate,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::MedicalReport => "medical_report",
            DocumentKind::NocCertificate => "noc_certificate",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "medical_report" => Ok(DocumentKind::MedicalReport),
            "noc_certificate" => Ok(DocumentKind::NocCertificate),
            other => Err(format!(
                "Unknown document kind '{}'. Expected medical_report or noc_certificate",
                other
            )),
        }
    }
}

/// Upload metadata as stored in `uploads`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub owner_id: String,
    pub kind: DocumentKind,
    pub original_filename: String,
    pub content_type: String,
    pub file_size: i64,
    pub storage_key: String,
    pub created_at: DateTime<Utc>,
}
