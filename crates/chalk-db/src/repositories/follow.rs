//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chalk_core::entities::{Follow, User};
use chalk_core::error::DomainError;
use chalk_core::traits::{FollowRepository, RepoResult};
use chalk_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

const USER_COLUMNS: &str =
    "u.id, u.username, u.email, u.bio, u.avatar, u.role, u.is_active, u.created_at, u.updated_at";

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self, follow))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followee_id, created_at) VALUES ($1, $2, $3)",
        )
        .bind(follow.follower_id.into_inner())
        .bind(follow.followee_id.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFollowing))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<()> {
        let result =
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
                .bind(follower_id.into_inner())
                .bind(followee_id.into_inner())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FollowNotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(follower_id.into_inner())
        .bind(followee_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_followers(
        &self,
        user_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users u
            JOIN follows f ON f.follower_id = u.id
            WHERE f.followee_id = $1 AND u.deleted_at IS NULL
            ORDER BY f.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(user_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_following(
        &self,
        user_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users u
            JOIN follows f ON f.followee_id = u.id
            WHERE f.follower_id = $1 AND u.deleted_at IS NULL
            ORDER BY f.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(user_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_followers(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE followee_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_following(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE follower_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
