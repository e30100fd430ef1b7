use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::documents::dtos::{
    get_extension_from_content_type, is_mime_type_allowed, DocumentResponseDto,
    ALLOWED_MIME_TYPES,
};
use crate::features::documents::models::{DocumentKind, UploadedDocument};
use crate::modules::storage::BlobStorage;
use crate::modules::store::{collections, Document, DocumentStore, FieldFilter};
use crate::shared::constants::MAX_DOCUMENT_SIZE;

/// A file as received from the client
pub struct IncomingFile {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

pub struct DocumentService {
    store: Arc<dyn DocumentStore>,
    storage: Arc<dyn BlobStorage>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn DocumentStore>, storage: Arc<dyn BlobStorage>) -> Self {
        Self { store, storage }
    }

    fn check_file(file: &IncomingFile) -> Result<()> {
        if file.data.is_empty() {
            return Err(AppError::BadRequest("File is empty".to_string()));
        }
        if file.data.len() > MAX_DOCUMENT_SIZE {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {} bytes ({} MB)",
                MAX_DOCUMENT_SIZE,
                MAX_DOCUMENT_SIZE / 1024 / 1024
            )));
        }
        if !is_mime_type_allowed(&file.content_type) {
            return Err(AppError::BadRequest(format!(
                "File type '{}' is not allowed. Allowed types: {}",
                file.content_type,
                ALLOWED_MIME_TYPES.join(", ")
            )));
        }
        Ok(())
    }

    async fn to_response(&self, id: String, doc: UploadedDocument) -> Result<DocumentResponseDto> {
        let url = self.storage.presigned_url(&doc.storage_key).await?;
        Ok(DocumentResponseDto {
            id,
            kind: doc.kind,
            original_filename: doc.original_filename,
            content_type: doc.content_type,
            file_size: doc.file_size,
            url,
            created_at: doc.created_at,
        })
    }

    /// Store the file privately and record its metadata
    pub async fn upload(
        &self,
        owner_id: &str,
        kind: DocumentKind,
        file: IncomingFile,
    ) -> Result<DocumentResponseDto> {
        Self::check_file(&file)?;

        let extension = get_extension_from_content_type(&file.content_type).unwrap_or("bin");
        let path = format!("{}/{}/{}.{}", kind, owner_id, Uuid::new_v4(), extension);
        let file_size = file.data.len() as i64;

        let storage_key = self
            .storage
            .upload(&path, file.data, &file.content_type)
            .await?;
        debug!("Document stored: {}", storage_key);

        let metadata = UploadedDocument {
            owner_id: owner_id.to_string(),
            kind,
            original_filename: file.file_name,
            content_type: file.content_type,
            file_size,
            storage_key,
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(&metadata)
            .map_err(|e| AppError::Internal(format!("Failed to encode upload: {}", e)))?;
        let doc = self.store.add(collections::UPLOADS, body).await?;

        info!(
            "Document uploaded: id={}, kind={}, owner={}, size={}",
            doc.id, metadata.kind, metadata.owner_id, metadata.file_size
        );

        self.to_response(doc.id, metadata).await
    }

    /// The owner's documents, optionally of one kind
    pub async fn list(
        &self,
        owner_id: &str,
        kind: Option<DocumentKind>,
    ) -> Result<Vec<DocumentResponseDto>> {
        let mut filters = vec![FieldFilter::eq("ownerId", owner_id)];
        if let Some(kind) = kind {
            filters.push(FieldFilter::eq("kind", kind.as_str()));
        }
        let docs = self.store.query(collections::UPLOADS, &filters).await?;

        let mut documents = Vec::with_capacity(docs.len());
        for doc in &docs {
            match doc.decode::<UploadedDocument>() {
                Ok(metadata) => documents.push(self.to_response(doc.id.clone(), metadata).await?),
                Err(e) => warn!("Skipping malformed upload document: {}", e),
            }
        }
        Ok(documents)
    }

    async fn owned(&self, owner_id: &str, id: &str) -> Result<(Document, UploadedDocument)> {
        let doc = self
            .store
            .get(collections::UPLOADS, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;
        let metadata: UploadedDocument = doc.decode()?;

        if metadata.owner_id != owner_id {
            return Err(AppError::Forbidden(
                "You do not have permission to access this document".to_string(),
            ));
        }
        Ok((doc, metadata))
    }

    pub async fn delete(&self, owner_id: &str, id: &str) -> Result<()> {
        let (doc, metadata) = self.owned(owner_id, id).await?;

        self.storage.delete(&metadata.storage_key).await?;
        self.store.delete(collections::UPLOADS, &doc.id).await?;

        info!("Document deleted: id={}, key={}", doc.id, metadata.storage_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{memory_store, MemoryBlobStorage};

    fn service() -> (DocumentService, Arc<MemoryBlobStorage>) {
        let storage = Arc::new(MemoryBlobStorage::default());
        (
            DocumentService::new(memory_store(), Arc::clone(&storage) as Arc<dyn BlobStorage>),
            storage,
        )
    }

    fn pdf(len: usize) -> IncomingFile {
        IncomingFile {
            data: vec![b'%'; len],
            file_name: "report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upload_and_list_own_documents() {
        let (service, storage) = service();

        let uploaded = service
            .upload("user-1", DocumentKind::MedicalReport, pdf(64))
            .await
            .unwrap();
        service
            .upload("user-1", DocumentKind::NocCertificate, pdf(32))
            .await
            .unwrap();
        service
            .upload("user-2", DocumentKind::MedicalReport, pdf(16))
            .await
            .unwrap();

        assert_eq!(uploaded.file_size, 64);
        assert!(uploaded.url.starts_with("memory://medical_report/user-1/"));
        assert_eq!(storage.len().await, 3);

        assert_eq!(service.list("user-1", None).await.unwrap().len(), 2);
        let reports = service
            .list("user-1", Some(DocumentKind::MedicalReport))
            .await
            .unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].original_filename, "report.pdf");
    }

    #[tokio::test]
    async fn test_rejects_bad_files() {
        let (service, storage) = service();

        let err = service
            .upload("user-1", DocumentKind::MedicalReport, pdf(MAX_DOCUMENT_SIZE + 1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let exe = IncomingFile {
            data: vec![0; 8],
            file_name: "run.exe".to_string(),
            content_type: "application/x-msdownload".to_string(),
        };
        let err = service
            .upload("user-1", DocumentKind::MedicalReport, exe)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = service
            .upload("user-1", DocumentKind::MedicalReport, pdf(0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(storage.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_is_owner_only() {
        let (service, storage) = service();
        let doc = service
            .upload("user-1", DocumentKind::MedicalReport, pdf(8))
            .await
            .unwrap();

        let err = service.delete("user-2", &doc.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        service.delete("user-1", &doc.id).await.unwrap();
        assert_eq!(storage.len().await, 0);
        assert!(service.list("user-1", None).await.unwrap().is_empty());
    }
}
