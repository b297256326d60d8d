//! Notification entity <-> model mapper

use chalk_core::entities::{Notification, NotificationEntity, NotificationType};
use chalk_core::value_objects::Snowflake;

use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            actor_id: Snowflake::new(model.actor_id),
            notification_type: NotificationType::parse(&model.notification_type)
                .unwrap_or(NotificationType::ReactionOnStory),
            entity_type: NotificationEntity::parse(&model.entity_type)
                .unwrap_or(NotificationEntity::Story),
            entity_id: Snowflake::new(model.entity_id),
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}

/// Convert Notification entity reference to values for database insertion
pub struct NotificationInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub actor_id: i64,
    pub notification_type: &'static str,
    pub entity_type: &'static str,
    pub entity_id: i64,
    pub message: &'a str,
    pub is_read: bool,
}

impl<'a> NotificationInsert<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self {
            id: notification.id.into_inner(),
            user_id: notification.user_id.into_inner(),
            actor_id: notification.actor_id.into_inner(),
            notification_type: notification.notification_type.as_str(),
            entity_type: notification.entity_type.as_str(),
            entity_id: notification.entity_id.into_inner(),
            message: &notification.message,
            is_read: notification.is_read,
        }
    }
}
