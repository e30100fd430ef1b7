#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use crate::modules::store::{Document, DocumentStore, FieldFilter, MemoryDocumentStore, StoreError};

#[cfg(test)]
use serde_json::Value;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, Router};

#[cfg(test)]
use crate::features::camps::dtos::CampRequestDto;

#[cfg(test)]
use crate::features::districts::District;

#[cfg(test)]
use chrono::{Duration, Utc};

#[cfg(test)]
use fake::{
    faker::{company::en::CompanyName, internet::en::SafeEmail},
    Fake,
};

#[cfg(test)]
use crate::core::error::AppError;

#[cfg(test)]
use crate::modules::storage::BlobStorage;

#[cfg(test)]
use std::collections::HashMap;

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
pub const ORG_ADMIN_ID: &str = "test-org-admin";

#[cfg(test)]
pub const CITIZEN_ID: &str = "test-citizen";

#[cfg(test)]
pub fn create_user(account_id: &str, roles: &[&str]) -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: account_id.to_string(),
        sub: format!("sub-{}", account_id),
        email: Some(SafeEmail().fake()),
        roles: roles.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
pub fn create_org_admin_user() -> AuthenticatedUser {
    create_user(ORG_ADMIN_ID, &["org_admin"])
}

#[cfg(test)]
pub fn create_citizen_user() -> AuthenticatedUser {
    create_user(CITIZEN_ID, &["citizen"])
}

/// Inject a fixed user into every request, standing in for the JWT middleware
#[cfg(test)]
pub fn with_user_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

#[cfg(test)]
pub fn with_org_admin_auth(router: Router) -> Router {
    with_user_auth(router, create_org_admin_user())
}

#[cfg(test)]
pub fn with_citizen_auth(router: Router) -> Router {
    with_user_auth(router, create_citizen_user())
}

#[cfg(test)]
pub fn memory_store() -> Arc<dyn DocumentStore> {
    Arc::new(MemoryDocumentStore::new())
}

/// A valid camp request scheduled `days_ahead` days from now
#[cfg(test)]
pub fn camp_request(name: &str, location: District, days_ahead: i64) -> CampRequestDto {
    let date = Utc::now() + Duration::days(days_ahead);
    CampRequestDto {
        organization_name: CompanyName().fake(),
        health_camp_name: name.to_string(),
        location,
        date,
        time_from: date,
        time_to: date + Duration::hours(6),
        description: "Free eye and dental screening".to_string(),
        ambulances_available: 2,
        hospital_nearby: "GH Erode".to_string(),
        latitude: 11.34,
        longitude: 77.72,
        registration_url: "https://example.org/register".to_string(),
    }
}

/// Document store whose every operation fails
#[cfg(test)]
pub struct FailingStore;

#[cfg(test)]
#[async_trait::async_trait]
impl DocumentStore for FailingStore {
    async fn query(
        &self,
        _collection: &str,
        _filters: &[FieldFilter],
    ) -> Result<Vec<Document>, StoreError> {
        Err(offline())
    }

    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, StoreError> {
        Err(offline())
    }

    async fn set(&self, _collection: &str, _id: &str, _data: Value) -> Result<Document, StoreError> {
        Err(offline())
    }

    async fn add(&self, _collection: &str, _data: Value) -> Result<Document, StoreError> {
        Err(offline())
    }

    async fn update(
        &self,
        _collection: &str,
        _id: &str,
        _patch: Value,
    ) -> Result<Document, StoreError> {
        Err(offline())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<bool, StoreError> {
        Err(offline())
    }
}

#[cfg(test)]
fn offline() -> StoreError {
    StoreError::InvalidDocument("store offline".to_string())
}

/// Object storage kept in memory; presigned URLs use a `memory://` scheme
#[cfg(test)]
#[derive(Default)]
pub struct MemoryBlobStorage {
    objects: tokio::sync::RwLock<HashMap<String, Vec<u8>>>,
}

#[cfg(test)]
impl MemoryBlobStorage {
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl BlobStorage for MemoryBlobStorage {
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, AppError> {
        self.objects.write().await.insert(key.to_string(), data);
        Ok(key.to_string())
    }

    async fn presigned_url(&self, key: &str) -> Result<String, AppError> {
        Ok(format!("memory://{}", key))
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.objects.write().await.remove(key);
        Ok(())
    }
}
