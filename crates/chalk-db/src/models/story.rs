//! Story database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the stories table
#[derive(Debug, Clone, FromRow)]
pub struct StoryModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub like_count: i32,
    pub comment_count: i32,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl StoryModel {
    /// Check if story is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
