use std::sync::Arc;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::config::{DatabaseConfig, StoreConfig};
use crate::modules::store::{DocumentStore, MemoryDocumentStore, PgDocumentStore, StoreError};

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Open the configured document store backend
///
/// The Postgres backend runs pending migrations before it is handed out.
pub async fn open_document_store(
    config: &StoreConfig,
) -> Result<Arc<dyn DocumentStore>, StoreError> {
    match config {
        StoreConfig::Postgres(db) => {
            let pool = create_pool(db).await?;
            tracing::info!("Database connection pool created");

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| StoreError::Database(sqlx::Error::Migrate(Box::new(e))))?;
            tracing::info!("Database migrations completed successfully");

            Ok(Arc::new(PgDocumentStore::new(pool)))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}
