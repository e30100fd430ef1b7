//! Storage module for uploaded documents
//!
//! Provides a MinIO/S3-compatible client for private object storage and
//! presigned download URLs.

mod minio_client;

pub use minio_client::MinIOClient;

use async_trait::async_trait;

use crate::core::error::AppError;

/// Private object storage used by the documents feature
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Store an object and return its key
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> Result<String, AppError>;

    /// Time-limited download URL for an object
    async fn presigned_url(&self, key: &str) -> Result<String, AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;
}
