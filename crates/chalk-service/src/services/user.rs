//! User service
//!
//! Profile reads with social counters, profile updates, and per-user
//! story listings.

use chalk_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CurrentUserResponse, PaginatedResponse, ProfileResponse, StoryResponse,
    UpdateProfileRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user's own record
    #[instrument(skip(self))]
    pub async fn get_current(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Get a public profile with follower/following/story counts
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let follower_count = self.ctx.follow_repo().count_followers(user_id).await?;
        let following_count = self.ctx.follow_repo().count_following(user_id).await?;
        let story_count = self.ctx.story_repo().count_by_author(user_id).await?;

        Ok(ProfileResponse {
            user: UserResponse::from(&user),
            follower_count,
            following_count,
            story_count,
        })
    }

    /// Update the authenticated user's profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(username) = request.username {
            user.username = username;
        }
        // Absent fields keep their current values
        user.apply_profile(
            request.bio.or(user.bio.clone()),
            request.avatar.or(user.avatar.clone()),
        );

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Profile updated");
        Ok(CurrentUserResponse::from(&user))
    }

    /// List one user's stories, newest first
    #[instrument(skip(self))]
    pub async fn list_stories(
        &self,
        user_id: Snowflake,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<StoryResponse>> {
        // 404 for unknown users rather than an empty page
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::not_found("User", user_id.to_string()));
        }

        let offset = (page - 1) * per_page;
        let stories = self
            .ctx
            .story_repo()
            .list_by_author(user_id, per_page, offset)
            .await?;
        let total = self.ctx.story_repo().count_by_author(user_id).await?;

        let data = stories.iter().map(StoryResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
