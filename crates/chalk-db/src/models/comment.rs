//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub story_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CommentModel {
    /// Check if comment is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Row shape of the story comment listing: comment columns joined with
/// the author and the active upvote/downvote tallies
#[derive(Debug, Clone, FromRow)]
pub struct CommentVoteModel {
    pub id: i64,
    pub story_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_email: String,
    pub author_bio: Option<String>,
    pub author_avatar: Option<String>,
    pub author_role: String,
    pub author_is_active: bool,
    pub author_created_at: DateTime<Utc>,
    pub author_updated_at: DateTime<Utc>,
    pub upvotes: i64,
    pub downvotes: i64,
}
