//! Admin service
//!
//! Moderation surface: user listing, activation toggles, and removal of
//! any story or comment. Every operation requires the admin role.

use chalk_core::entities::User;
use chalk_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{PaginatedResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the actor and reject non-admins
    async fn require_admin(&self, actor_id: Snowflake) -> ServiceResult<User> {
        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))?;

        if !actor.is_admin() {
            return Err(ServiceError::from(DomainError::AdminRequired));
        }
        Ok(actor)
    }

    /// List all users, newest first
    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        actor_id: Snowflake,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<UserResponse>> {
        self.require_admin(actor_id).await?;

        let offset = (page - 1) * per_page;
        let users = self.ctx.user_repo().list(per_page, offset).await?;
        let total = self.ctx.user_repo().count().await?;

        let data = users.iter().map(UserResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// Deactivate or reactivate a user account
    #[instrument(skip(self))]
    pub async fn set_user_active(
        &self,
        actor_id: Snowflake,
        user_id: Snowflake,
        is_active: bool,
    ) -> ServiceResult<()> {
        self.require_admin(actor_id).await?;
        self.ctx.user_repo().set_active(user_id, is_active).await?;

        info!(user_id = %user_id, is_active, admin_id = %actor_id, "User active flag changed");
        Ok(())
    }

    /// Remove any story
    #[instrument(skip(self))]
    pub async fn delete_story(&self, actor_id: Snowflake, story_id: Snowflake) -> ServiceResult<()> {
        self.require_admin(actor_id).await?;
        self.ctx.story_repo().delete(story_id).await?;

        info!(story_id = %story_id, admin_id = %actor_id, "Story removed by admin");
        Ok(())
    }

    /// Remove any comment
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        actor_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        self.require_admin(actor_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))
            .map_err(ServiceError::from)?;

        self.ctx
            .comment_repo()
            .delete(comment_id, comment.story_id)
            .await?;

        info!(comment_id = %comment_id, admin_id = %actor_id, "Comment removed by admin");
        Ok(())
    }
}
