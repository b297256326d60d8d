//! PostgreSQL implementation of DocumentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chalk_core::entities::Document;
use chalk_core::error::DomainError;
use chalk_core::traits::{DocumentRepository, RepoResult};
use chalk_core::value_objects::Snowflake;

use crate::mappers::DocumentInsert;
use crate::models::DocumentModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of DocumentRepository
#[derive(Clone)]
pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    /// Create a new PgDocumentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Document>> {
        let result = sqlx::query_as::<_, DocumentModel>(
            "SELECT * FROM documents WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Document::from))
    }

    #[instrument(skip(self, document))]
    async fn create(&self, document: &Document) -> RepoResult<()> {
        let insert = DocumentInsert::new(document);

        sqlx::query(
            r#"
            INSERT INTO documents (id, owner_id, title, description, file_url, subject, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.owner_id)
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.file_url)
        .bind(insert.subject)
        .bind(document.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE documents SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DocumentNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Document>> {
        let results = sqlx::query_as::<_, DocumentModel>(
            r#"
            SELECT * FROM documents
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Document::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn save(&self, user_id: Snowflake, document_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            "INSERT INTO document_saves (user_id, document_id, created_at) VALUES ($1, $2, NOW())",
        )
        .bind(user_id.into_inner())
        .bind(document_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadySaved))?;

        sqlx::query("UPDATE documents SET save_count = save_count + 1 WHERE id = $1")
            .bind(document_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn unsave(&self, user_id: Snowflake, document_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result =
            sqlx::query("DELETE FROM document_saves WHERE user_id = $1 AND document_id = $2")
                .bind(user_id.into_inner())
                .bind(document_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DocumentNotFound(document_id));
        }

        sqlx::query(
            "UPDATE documents SET save_count = GREATEST(save_count - 1, 0) WHERE id = $1",
        )
        .bind(document_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgDocumentRepository>();
    }
}
