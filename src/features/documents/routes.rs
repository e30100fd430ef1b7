use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::features::documents::handlers::{delete_document, list_documents, upload_document};
use crate::features::documents::services::DocumentService;
use crate::shared::constants::MAX_DOCUMENT_SIZE;

/// Protected document routes (require JWT authentication)
pub fn routes(service: Arc<DocumentService>) -> Router {
    Router::new()
        .route(
            "/api/documents",
            // room for multipart overhead on top of the file itself
            get(list_documents)
                .post(upload_document)
                .layer(DefaultBodyLimit::max(MAX_DOCUMENT_SIZE + 1024 * 1024)),
        )
        .route("/api/documents/{id}", delete(delete_document))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::BlobStorage;
    use crate::shared::test_helpers::{memory_store, with_citizen_auth, MemoryBlobStorage};
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        let storage: Arc<dyn BlobStorage> = Arc::new(MemoryBlobStorage::default());
        let service = Arc::new(DocumentService::new(memory_store(), storage));
        TestServer::new(with_citizen_auth(routes(service))).unwrap()
    }

    fn pdf_form(kind: &str) -> MultipartForm {
        MultipartForm::new().add_text("kind", kind.to_string()).add_part(
            "file",
            Part::bytes(b"%PDF-1.4 test".to_vec())
                .file_name("report.pdf")
                .mime_type("application/pdf"),
        )
    }

    #[tokio::test]
    async fn test_upload_then_list() {
        let server = server();

        let response = server
            .post("/api/documents")
            .multipart(pdf_form("medical_report"))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["kind"], "medical_report");
        assert_eq!(body["data"]["file_size"], 13);

        let body: Value = server.get("/api/documents").await.json();
        assert_eq!(body["meta"]["total"], 1);
        assert!(body["data"][0]["url"]
            .as_str()
            .unwrap()
            .starts_with("memory://"));
    }

    #[tokio::test]
    async fn test_unknown_kind_and_missing_file() {
        let server = server();

        server
            .post("/api/documents")
            .multipart(pdf_form("selfie"))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/api/documents")
            .multipart(MultipartForm::new().add_text("kind", "noc_certificate"))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_document() {
        let server = server();
        let body: Value = server
            .post("/api/documents")
            .multipart(pdf_form("noc_certificate"))
            .await
            .json();
        let path = format!("/api/documents/{}", body["data"]["id"].as_str().unwrap());

        server.delete(&path).await.assert_status_ok();
        server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
    }
}
