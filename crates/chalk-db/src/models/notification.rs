//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub user_id: i64,
    pub actor_id: i64,
    pub notification_type: String,
    pub entity_type: String,
    pub entity_id: i64,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
