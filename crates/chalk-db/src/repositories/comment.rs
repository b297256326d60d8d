//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chalk_core::entities::Comment;
use chalk_core::error::DomainError;
use chalk_core::traits::{CommentRepository, CommentWithVotes, RepoResult};
use chalk_core::value_objects::Snowflake;

use crate::mappers::CommentInsert;
use crate::models::{CommentModel, CommentVoteModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            "SELECT * FROM comments WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let insert = CommentInsert::new(comment);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO comments (id, story_id, author_id, parent_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.story_id)
        .bind(insert.author_id)
        .bind(insert.parent_id)
        .bind(insert.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("UPDATE stories SET comment_count = comment_count + 1 WHERE id = $1")
            .bind(insert.story_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake, story_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result =
            sqlx::query("UPDATE comments SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        sqlx::query(
            "UPDATE stories SET comment_count = GREATEST(comment_count - 1, 0) WHERE id = $1",
        )
        .bind(story_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_story(&self, story_id: Snowflake) -> RepoResult<Vec<CommentWithVotes>> {
        // One grouped query: comments + authors + active vote tallies.
        // Load order (created_at, id) is the deterministic tie-break for
        // the vote-score sort performed by the service.
        let results = sqlx::query_as::<_, CommentVoteModel>(
            r#"
            SELECT c.id, c.story_id, c.author_id, c.parent_id, c.content,
                   c.created_at, c.updated_at,
                   u.username   AS author_username,
                   u.email      AS author_email,
                   u.bio        AS author_bio,
                   u.avatar     AS author_avatar,
                   u.role       AS author_role,
                   u.is_active  AS author_is_active,
                   u.created_at AS author_created_at,
                   u.updated_at AS author_updated_at,
                   COUNT(r.id) FILTER (WHERE r.reaction_type = 'upvote')   AS upvotes,
                   COUNT(r.id) FILTER (WHERE r.reaction_type = 'downvote') AS downvotes
            FROM comments c
            JOIN users u ON u.id = c.author_id
            LEFT JOIN reactions r
                   ON r.target_type = 'comment'
                  AND r.target_id = c.id
                  AND r.deleted_at IS NULL
            WHERE c.story_id = $1 AND c.deleted_at IS NULL
            GROUP BY c.id, u.id
            ORDER BY c.created_at ASC, c.id ASC
            "#,
        )
        .bind(story_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithVotes::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
