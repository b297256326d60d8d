//! Notification service
//!
//! Creation with self-suppression and unread de-duplication, plus the
//! user-facing inbox operations. Every caller that fans out a
//! notification treats failure as non-fatal.

use chalk_core::entities::{Notification, NotificationEntity, NotificationType};
use chalk_core::{DomainError, Snowflake};
use tracing::{debug, instrument};

use crate::dto::{NotificationResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a notification, applying the suppression rules
    ///
    /// Returns `None` without inserting when the actor is the recipient,
    /// or when the type collapses repeats and an unread row already
    /// exists for the exact (recipient, actor, type, entity) tuple.
    #[instrument(skip(self, message))]
    pub async fn create_notification(
        &self,
        user_id: Snowflake,
        actor_id: Snowflake,
        notification_type: NotificationType,
        entity_type: NotificationEntity,
        entity_id: Snowflake,
        message: String,
    ) -> ServiceResult<Option<Notification>> {
        if user_id == actor_id {
            debug!(user_id = %user_id, "Self-notification suppressed");
            return Ok(None);
        }

        if notification_type.dedups_while_unread()
            && self
                .ctx
                .notification_repo()
                .unread_exists(user_id, actor_id, notification_type, entity_type, entity_id)
                .await?
        {
            debug!(
                user_id = %user_id,
                actor_id = %actor_id,
                "Duplicate unread notification suppressed"
            );
            return Ok(None);
        }

        let notification = Notification::new(
            self.ctx.generate_id(),
            user_id,
            actor_id,
            notification_type,
            entity_type,
            entity_id,
            message,
        );
        self.ctx.notification_repo().create(&notification).await?;

        Ok(Some(notification))
    }

    /// List a user's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Snowflake,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<NotificationResponse>> {
        let offset = (page - 1) * per_page;
        let notifications = self
            .ctx
            .notification_repo()
            .list_for_user(user_id, per_page, offset)
            .await?;
        let total = self.ctx.notification_repo().count_for_user(user_id).await?;

        let data = notifications.iter().map(NotificationResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// Unread notification count
    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: Snowflake) -> ServiceResult<i64> {
        Ok(self.ctx.notification_repo().count_unread(user_id).await?)
    }

    /// Mark one notification read; only the recipient may do this
    #[instrument(skip(self))]
    pub async fn mark_read(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let notification = self
            .ctx
            .notification_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotificationNotFound(id))
            .map_err(ServiceError::from)?;

        if notification.user_id != user_id {
            return Err(ServiceError::from(DomainError::NotResourceOwner));
        }

        self.ctx.notification_repo().mark_read(id).await?;
        Ok(())
    }

    /// Mark all of a user's notifications read; returns rows affected
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, user_id: Snowflake) -> ServiceResult<u64> {
        Ok(self.ctx.notification_repo().mark_all_read(user_id).await?)
    }
}
