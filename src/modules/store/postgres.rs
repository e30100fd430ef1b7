use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::{ensure_object, new_document_id, Document, DocumentStore, FieldFilter, StoreError};

/// Document store backed by a single Postgres JSONB table
pub struct PgDocumentStore {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    data: Json<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            data: row.data.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn query(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<Vec<Document>, StoreError> {
        if filters.iter().any(FieldFilter::is_unsatisfiable) {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, data, created_at, updated_at FROM documents WHERE collection = ",
        );
        builder.push_bind(collection.to_string());

        for filter in filters {
            match filter {
                FieldFilter::Eq { field, value } => {
                    builder
                        .push(" AND data -> ")
                        .push_bind(field.clone())
                        .push(" = ")
                        .push_bind(Json(value.clone()));
                }
                FieldFilter::In { field, values } => {
                    let values: Vec<Json<Value>> = values.iter().cloned().map(Json).collect();
                    builder
                        .push(" AND data -> ")
                        .push_bind(field.clone())
                        .push(" = ANY(")
                        .push_bind(values)
                        .push(")");
                }
            }
        }
        builder.push(" ORDER BY created_at, id");

        let rows = builder
            .build_query_as::<DocumentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query collection '{}': {:?}", collection, e);
                StoreError::Database(e)
            })?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, data, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Document::from))
    }

    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<Document, StoreError> {
        ensure_object(&data)?;

        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(data))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write {}/{}: {:?}", collection, id, e);
            StoreError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn add(&self, collection: &str, data: Value) -> Result<Document, StoreError> {
        let id = new_document_id();
        self.set(collection, &id, data).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Value,
    ) -> Result<Document, StoreError> {
        ensure_object(&patch)?;

        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            UPDATE documents
            SET data = data || $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(patch))
        .fetch_optional(&self.pool)
        .await?;

        row.map(Document::from)
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
