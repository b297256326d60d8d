//! Story service
//!
//! Story CRUD, the global listing, and the followed-authors feed.

use chalk_core::entities::Story;
use chalk_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{CreateStoryRequest, PaginatedResponse, StoryResponse, UpdateStoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Story service
pub struct StoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StoryService<'a> {
    /// Create a new StoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a story
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        request: CreateStoryRequest,
    ) -> ServiceResult<StoryResponse> {
        let mut story = Story::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.content,
        );
        story.image_url = request.image_url;

        self.ctx.story_repo().create(&story).await?;

        info!(story_id = %story.id, author_id = %author_id, "Story created");
        Ok(StoryResponse::from(&story))
    }

    /// Get a story, counting the view
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<StoryResponse> {
        let mut story = self
            .ctx
            .story_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", id.to_string()))?;

        self.ctx.story_repo().increment_view_count(id).await?;
        story.view_count += 1;

        Ok(StoryResponse::from(&story))
    }

    /// Update a story; author only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        id: Snowflake,
        request: UpdateStoryRequest,
    ) -> ServiceResult<StoryResponse> {
        let mut story = self
            .ctx
            .story_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", id.to_string()))?;

        if !story.is_authored_by(user_id) {
            return Err(ServiceError::from(DomainError::NotResourceOwner));
        }

        if let Some(title) = request.title {
            story.title = title;
        }
        if let Some(content) = request.content {
            story.content = content;
        }
        if let Some(image_url) = request.image_url {
            story.image_url = Some(image_url);
        }
        story.updated_at = Utc::now();

        self.ctx.story_repo().update(&story).await?;

        info!(story_id = %id, "Story updated");
        Ok(StoryResponse::from(&story))
    }

    /// Soft delete a story; author or admin
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let story = self
            .ctx
            .story_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", id.to_string()))?;

        if !story.is_authored_by(user_id) {
            let actor = self
                .ctx
                .user_repo()
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
            if !actor.is_admin() {
                return Err(ServiceError::from(DomainError::NotResourceOwner));
            }
        }

        self.ctx.story_repo().delete(id).await?;

        info!(story_id = %id, deleted_by = %user_id, "Story deleted");
        Ok(())
    }

    /// Paginated listing, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<StoryResponse>> {
        let offset = (page - 1) * per_page;
        let stories = self.ctx.story_repo().list(per_page, offset).await?;
        let total = self.ctx.story_repo().count().await?;

        let data = stories.iter().map(StoryResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// Stories from authors the user follows, newest first
    #[instrument(skip(self))]
    pub async fn feed(
        &self,
        user_id: Snowflake,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<StoryResponse>> {
        let offset = (page - 1) * per_page;
        let stories = self
            .ctx
            .story_repo()
            .list_feed(user_id, per_page, offset)
            .await?;
        let total = self.ctx.story_repo().count_feed(user_id).await?;

        let data = stories.iter().map(StoryResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
