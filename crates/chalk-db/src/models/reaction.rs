//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub user_id: i64,
    pub target_type: String,
    pub target_id: i64,
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ReactionModel {
    /// Check if reaction is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Reaction joined with the reacting user, for target listings
#[derive(Debug, Clone, FromRow)]
pub struct ReactionWithUserModel {
    pub id: i64,
    pub user_id: i64,
    pub target_type: String,
    pub target_id: i64,
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
    pub user_username: String,
    pub user_email: String,
    pub user_bio: Option<String>,
    pub user_avatar: Option<String>,
    pub user_role: String,
    pub user_is_active: bool,
    pub user_created_at: DateTime<Utc>,
    pub user_updated_at: DateTime<Utc>,
}
