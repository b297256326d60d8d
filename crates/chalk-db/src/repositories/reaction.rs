//! PostgreSQL implementation of ReactionRepository
//!
//! The toggle state machine runs in a single transaction with the
//! candidate row locked, so concurrent toggles for the same
//! (user, target) serialize instead of double-inserting. The partial
//! unique index on active rows backstops the lock.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use chalk_core::entities::{Reaction, User};
use chalk_core::error::DomainError;
use chalk_core::traits::{ReactionRepository, RepoResult, ToggleOutcome};
use chalk_core::value_objects::{ReactionType, Snowflake, Target};

use crate::models::{ReactionModel, ReactionWithUserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Adjust a story's denormalized like counter inside the toggle
    /// transaction. No-op for comment targets.
    async fn bump_like_count(
        tx: &mut Transaction<'_, Postgres>,
        target: Target,
        delta: i32,
    ) -> RepoResult<()> {
        if !target.is_story() {
            return Ok(());
        }

        let sql = if delta >= 0 {
            "UPDATE stories SET like_count = like_count + $2 WHERE id = $1"
        } else {
            "UPDATE stories SET like_count = GREATEST(like_count + $2, 0) WHERE id = $1"
        };

        sqlx::query(sql)
            .bind(target.id.into_inner())
            .bind(delta)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn toggle(
        &self,
        new_id: Snowflake,
        user_id: Snowflake,
        target: Target,
        reaction_type: ReactionType,
    ) -> RepoResult<ToggleOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the candidate row, soft-deleted rows included. An active
        // row sorts first when both exist.
        let existing = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, user_id, target_type, target_id, reaction_type, created_at, deleted_at
            FROM reactions
            WHERE user_id = $1 AND target_type = $2 AND target_id = $3
            ORDER BY (deleted_at IS NULL) DESC, created_at DESC
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // A soft-deleted leftover is purged and treated as absent
        let existing = match existing {
            Some(row) if row.is_deleted() => {
                sqlx::query(
                    r#"
                    DELETE FROM reactions
                    WHERE user_id = $1 AND target_type = $2 AND target_id = $3
                      AND deleted_at IS NOT NULL
                    "#,
                )
                .bind(user_id.into_inner())
                .bind(target.kind.as_str())
                .bind(target.id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
                None
            }
            other => other,
        };

        let outcome = match existing {
            // Same type: toggle off
            Some(row) if row.reaction_type == reaction_type.as_str() => {
                sqlx::query("UPDATE reactions SET deleted_at = NOW() WHERE id = $1")
                    .bind(row.id)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;

                Self::bump_like_count(&mut tx, target, -1).await?;
                ToggleOutcome::Removed
            }
            // Different type: switch in place, counters untouched
            Some(row) => {
                let updated = sqlx::query_as::<_, ReactionModel>(
                    r#"
                    UPDATE reactions SET reaction_type = $2
                    WHERE id = $1
                    RETURNING id, user_id, target_type, target_id, reaction_type, created_at, deleted_at
                    "#,
                )
                .bind(row.id)
                .bind(reaction_type.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;

                ToggleOutcome::Switched(Reaction::from(updated))
            }
            // No active reaction: insert
            None => {
                let inserted = sqlx::query_as::<_, ReactionModel>(
                    r#"
                    INSERT INTO reactions (id, user_id, target_type, target_id, reaction_type, created_at)
                    VALUES ($1, $2, $3, $4, $5, NOW())
                    RETURNING id, user_id, target_type, target_id, reaction_type, created_at, deleted_at
                    "#,
                )
                .bind(new_id.into_inner())
                .bind(user_id.into_inner())
                .bind(target.kind.as_str())
                .bind(target.id.into_inner())
                .bind(reaction_type.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;

                Self::bump_like_count(&mut tx, target, 1).await?;
                ToggleOutcome::Created(Reaction::from(inserted))
            }
        };

        tx.commit().await.map_err(map_db_error)?;
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, user_id, target_type, target_id, reaction_type, created_at, deleted_at
            FROM reactions
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result =
            sqlx::query("UPDATE reactions SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(reaction.id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReactionNotFound(reaction.id));
        }

        // Decrement only while positive
        if reaction.target.is_story() {
            sqlx::query(
                "UPDATE stories SET like_count = like_count - 1 WHERE id = $1 AND like_count > 0",
            )
            .bind(reaction.target.id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_target(
        &self,
        target: Target,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<(Reaction, User)>> {
        let results = sqlx::query_as::<_, ReactionWithUserModel>(
            r#"
            SELECT r.id, r.user_id, r.target_type, r.target_id, r.reaction_type, r.created_at,
                   u.username   AS user_username,
                   u.email      AS user_email,
                   u.bio        AS user_bio,
                   u.avatar     AS user_avatar,
                   u.role       AS user_role,
                   u.is_active  AS user_is_active,
                   u.created_at AS user_created_at,
                   u.updated_at AS user_updated_at
            FROM reactions r
            JOIN users u ON u.id = r.user_id
            WHERE r.target_type = $1 AND r.target_id = $2 AND r.deleted_at IS NULL
            ORDER BY r.created_at DESC, r.id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(<(Reaction, User)>::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_for_target(&self, target: Target) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions
            WHERE target_type = $1 AND target_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
