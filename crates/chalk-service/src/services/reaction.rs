//! Reaction service
//!
//! The toggle entry point, explicit removal, and per-target listings.
//! The toggle transaction itself lives in the repository; this layer
//! validates the target, generates the candidate ID, and fans out the
//! notification after commit.

use chalk_core::entities::{NotificationEntity, NotificationType};
use chalk_core::traits::ToggleOutcome;
use chalk_core::value_objects::{ReactionType, Target, TargetKind};
use chalk_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateReactionRequest, PaginatedResponse, ReactionResponse, ReactionWithUserResponse,
    ToggleReactionResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a reaction on a story or comment
    ///
    /// Same type toggles off, a different type switches in place, and an
    /// absent reaction is created. Only a brand-new story reaction
    /// notifies the author, and only after the transaction commits.
    #[instrument(skip(self, request))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        request: CreateReactionRequest,
    ) -> ServiceResult<ToggleReactionResponse> {
        let kind = TargetKind::parse(&request.target_type)
            .ok_or_else(|| ServiceError::validation("target_type must be story or comment"))?;
        let target_id: Snowflake = request
            .target_id
            .parse()
            .map_err(|_| ServiceError::validation("Invalid target_id"))?;
        let reaction_type = ReactionType::parse(&request.reaction_type)
            .ok_or_else(|| ServiceError::validation("Unknown reaction_type"))?;
        let target = Target::new(kind, target_id);

        // The target must exist before the toggle runs
        let story = match kind {
            TargetKind::Story => Some(
                self.ctx
                    .story_repo()
                    .find_by_id(target_id)
                    .await?
                    .ok_or(DomainError::StoryNotFound(target_id))
                    .map_err(ServiceError::from)?,
            ),
            TargetKind::Comment => {
                self.ctx
                    .comment_repo()
                    .find_by_id(target_id)
                    .await?
                    .ok_or(DomainError::CommentNotFound(target_id))
                    .map_err(ServiceError::from)?;
                None
            }
        };

        let outcome = self
            .ctx
            .reaction_repo()
            .toggle(self.ctx.generate_id(), user_id, target, reaction_type)
            .await?;

        let response = match &outcome {
            ToggleOutcome::Created(reaction) => {
                info!(user_id = %user_id, target = %target, kind = %reaction_type, "Reaction created");
                ToggleReactionResponse {
                    message: "Reaction created".to_string(),
                    reaction: Some(ReactionResponse::from(reaction)),
                }
            }
            ToggleOutcome::Switched(reaction) => {
                info!(user_id = %user_id, target = %target, kind = %reaction_type, "Reaction switched");
                ToggleReactionResponse {
                    message: "Reaction updated".to_string(),
                    reaction: Some(ReactionResponse::from(reaction)),
                }
            }
            ToggleOutcome::Removed => {
                info!(user_id = %user_id, target = %target, "Reaction removed");
                ToggleReactionResponse {
                    message: "Reaction removed".to_string(),
                    reaction: None,
                }
            }
        };

        // Notify after commit; only a newly created story reaction does
        if let (true, Some(story)) = (outcome.is_created(), story) {
            if let Err(e) = self
                .notify_story_author(user_id, &story, reaction_type)
                .await
            {
                warn!(story_id = %story.id, error = %e, "Reaction notification failed");
            }
        }

        Ok(response)
    }

    async fn notify_story_author(
        &self,
        actor_id: Snowflake,
        story: &chalk_core::entities::Story,
        reaction_type: ReactionType,
    ) -> ServiceResult<()> {
        if story.author_id == actor_id {
            return Ok(());
        }

        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))?;

        NotificationService::new(self.ctx)
            .create_notification(
                story.author_id,
                actor_id,
                NotificationType::ReactionOnStory,
                NotificationEntity::Story,
                story.id,
                format!(
                    "{} {} your story \"{}\"",
                    actor.username,
                    reaction_type.notification_verb(),
                    story.title
                ),
            )
            .await?;
        Ok(())
    }

    /// Remove the caller's reaction by ID
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let reaction = self
            .ctx
            .reaction_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReactionNotFound(id))
            .map_err(ServiceError::from)?;

        if !reaction.is_owned_by(user_id) {
            return Err(ServiceError::from(DomainError::NotResourceOwner));
        }

        self.ctx.reaction_repo().delete(&reaction).await?;

        info!(reaction_id = %id, user_id = %user_id, "Reaction deleted");
        Ok(())
    }

    /// List reactions on a target with their authors, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        target_type: &str,
        target_id: &str,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<ReactionWithUserResponse>> {
        let kind = TargetKind::parse(target_type)
            .ok_or_else(|| ServiceError::validation("target_type must be story or comment"))?;
        let id: Snowflake = target_id
            .parse()
            .map_err(|_| ServiceError::validation("Invalid target_id"))?;
        let target = Target::new(kind, id);

        let offset = (page - 1) * per_page;
        let reactions = self
            .ctx
            .reaction_repo()
            .list_for_target(target, per_page, offset)
            .await?;
        let total = self.ctx.reaction_repo().count_for_target(target).await?;

        let data = reactions.iter().map(ReactionWithUserResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
