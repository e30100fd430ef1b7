//! Document store module
//!
//! A small collection/document abstraction: every record lives in a named
//! collection under an opaque string id and carries a JSON object body.
//! Features talk to the [`DocumentStore`] trait only; the backing
//! implementation is chosen at startup.

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Collection names shared across features
pub mod collections {
    pub const HEALTH_CAMPS: &str = "healthCamps";
    pub const REGISTRATIONS: &str = "registrations";
    pub const COMPLAINTS: &str = "complaints";
    pub const FEEDBACKS: &str = "feedbacks";
    pub const USERS: &str = "users";
    pub const UPLOADS: &str = "uploads";
    pub const GOVT_DATA: &str = "govtdata";
    pub const SCRAPED_DATA: &str = "scrapedData";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl StoreError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

/// A stored document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Top-level field of the document body
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Deserialize the document body into a typed record
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            StoreError::InvalidDocument(format!("document '{}' has unexpected shape: {}", self.id, e))
        })
    }
}

/// Equality predicates on top-level document fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFilter {
    Eq { field: String, value: Value },
    In { field: String, values: Vec<Value> },
}

impl FieldFilter {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn any_of<V: Into<Value>>(field: &str, values: impl IntoIterator<Item = V>) -> Self {
        Self::In {
            field: field.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Evaluate the predicate against a document body
    pub fn matches(&self, data: &Value) -> bool {
        match self {
            Self::Eq { field, value } => data.get(field) == Some(value),
            Self::In { field, values } => data
                .get(field)
                .map(|v| values.contains(v))
                .unwrap_or(false),
        }
    }

    /// An `In` filter over no values can never match
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::In { values, .. } if values.is_empty())
    }
}

/// Collection/document persistence
///
/// `query` returns documents in insertion order. `update` merges the top-level
/// keys of `patch` into the existing body and fails with
/// [`StoreError::NotFound`] when the document does not exist.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn query(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<Vec<Document>, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create or overwrite a document under a caller-chosen id
    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<Document, StoreError>;

    /// Create a document under a generated id
    async fn add(&self, collection: &str, data: Value) -> Result<Document, StoreError>;

    async fn update(&self, collection: &str, id: &str, patch: Value)
        -> Result<Document, StoreError>;

    /// Returns whether a document was removed
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;
}

pub(crate) fn ensure_object(data: &Value) -> Result<(), StoreError> {
    if data.is_object() {
        Ok(())
    } else {
        Err(StoreError::InvalidDocument(
            "document body must be a JSON object".to_string(),
        ))
    }
}

pub(crate) fn new_document_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eq_filter_matches_top_level_field() {
        let filter = FieldFilter::eq("adminId", "admin-1");
        assert!(filter.matches(&json!({"adminId": "admin-1"})));
        assert!(!filter.matches(&json!({"adminId": "admin-2"})));
        assert!(!filter.matches(&json!({"other": "admin-1"})));
    }

    #[test]
    fn test_in_filter_matches_any_value() {
        let filter = FieldFilter::any_of("campId", ["a", "b"]);
        assert!(filter.matches(&json!({"campId": "b"})));
        assert!(!filter.matches(&json!({"campId": "c"})));
        assert!(!filter.is_unsatisfiable());
        assert!(FieldFilter::any_of::<String>("campId", vec![]).is_unsatisfiable());
    }

    #[test]
    fn test_decode_reports_shape_errors() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Named {
            name: String,
        }

        let doc = Document {
            id: "d1".to_string(),
            data: json!({"name": 42}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let err = doc.decode::<Named>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument(_)));
    }
}
