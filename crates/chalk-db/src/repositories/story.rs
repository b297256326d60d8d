//! PostgreSQL implementation of StoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chalk_core::entities::Story;
use chalk_core::error::DomainError;
use chalk_core::traits::{RepoResult, StoryRepository};
use chalk_core::value_objects::Snowflake;

use crate::mappers::StoryInsert;
use crate::models::StoryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StoryRepository
#[derive(Clone)]
pub struct PgStoryRepository {
    pool: PgPool,
}

impl PgStoryRepository {
    /// Create a new PgStoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryRepository for PgStoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Story>> {
        let result = sqlx::query_as::<_, StoryModel>(
            "SELECT * FROM stories WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Story::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, story: &Story) -> RepoResult<()> {
        let insert = StoryInsert::new(story);

        sqlx::query(
            r#"
            INSERT INTO stories (id, author_id, title, content, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.author_id)
        .bind(insert.title)
        .bind(insert.content)
        .bind(insert.image_url)
        .bind(story.created_at)
        .bind(story.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, story: &Story) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE stories
            SET title = $2, content = $3, image_url = $4, updated_at = $5
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(story.id.into_inner())
        .bind(&story.title)
        .bind(&story.content)
        .bind(story.image_url.as_deref())
        .bind(story.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::StoryNotFound(story.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE stories SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id.into_inner())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::StoryNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Story>> {
        let results = sqlx::query_as::<_, StoryModel>(
            r#"
            SELECT * FROM stories
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

        Ok(results.into_iter().map(Story::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stories WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_by_author(
        &self,
        author_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Story>> {
        let results = sqlx::query_as::<_, StoryModel>(
            r#"
            SELECT * FROM stories
            WHERE author_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Story::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM stories WHERE author_id = $1 AND deleted_at IS NULL",
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_feed(
        &self,
        follower_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Story>> {
        let results = sqlx::query_as::<_, StoryModel>(
            r#"
            SELECT s.* FROM stories s
            JOIN follows f ON f.followee_id = s.author_id
            WHERE f.follower_id = $1 AND s.deleted_at IS NULL
            ORDER BY s.created_at DESC, s.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Story::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_feed(&self, follower_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM stories s
            JOIN follows f ON f.followee_id = s.author_id
            WHERE f.follower_id = $1 AND s.deleted_at IS NULL
            "#,
        )
        .bind(follower_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    // Plain unlocked increment; a lost update under contention is fine
    #[instrument(skip(self))]
    async fn increment_view_count(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            "UPDATE stories SET view_count = view_count + 1 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgStoryRepository>();
    }
}
