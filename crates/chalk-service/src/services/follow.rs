//! Follow service
//!
//! The directed follow edge between users, with follower/following
//! listings and the new-follower notification.

use chalk_core::entities::{Follow, NotificationEntity, NotificationType};
use chalk_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{PaginatedResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow another user
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        follower_id: Snowflake,
        followee_id: Snowflake,
    ) -> ServiceResult<()> {
        let follow = Follow::new(follower_id, followee_id);
        if follow.is_self_follow() {
            return Err(ServiceError::from(DomainError::CannotFollowSelf));
        }

        let follower = self
            .ctx
            .user_repo()
            .find_by_id(follower_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", follower_id.to_string()))?;
        if self.ctx.user_repo().find_by_id(followee_id).await?.is_none() {
            return Err(ServiceError::not_found("User", followee_id.to_string()));
        }

        // Duplicate pairs surface as AlreadyFollowing from the repository
        self.ctx.follow_repo().create(&follow).await?;

        info!(follower_id = %follower_id, followee_id = %followee_id, "Follow created");

        let result = NotificationService::new(self.ctx)
            .create_notification(
                followee_id,
                follower_id,
                NotificationType::NewFollower,
                NotificationEntity::User,
                follower_id,
                format!("{} started following you", follower.username),
            )
            .await;
        if let Err(e) = result {
            warn!(followee_id = %followee_id, error = %e, "Follow notification failed");
        }

        Ok(())
    }

    /// Unfollow a user
    #[instrument(skip(self))]
    pub async fn unfollow(
        &self,
        follower_id: Snowflake,
        followee_id: Snowflake,
    ) -> ServiceResult<()> {
        self.ctx.follow_repo().delete(follower_id, followee_id).await?;

        info!(follower_id = %follower_id, followee_id = %followee_id, "Follow removed");
        Ok(())
    }

    /// List the users following `user_id`
    #[instrument(skip(self))]
    pub async fn list_followers(
        &self,
        user_id: Snowflake,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<UserResponse>> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::not_found("User", user_id.to_string()));
        }

        let offset = (page - 1) * per_page;
        let users = self
            .ctx
            .follow_repo()
            .list_followers(user_id, per_page, offset)
            .await?;
        let total = self.ctx.follow_repo().count_followers(user_id).await?;

        let data = users.iter().map(UserResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// List the users `user_id` follows
    #[instrument(skip(self))]
    pub async fn list_following(
        &self,
        user_id: Snowflake,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<UserResponse>> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::not_found("User", user_id.to_string()));
        }

        let offset = (page - 1) * per_page;
        let users = self
            .ctx
            .follow_repo()
            .list_following(user_id, per_page, offset)
            .await?;
        let total = self.ctx.follow_repo().count_following(user_id).await?;

        let data = users.iter().map(UserResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
