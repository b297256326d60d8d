//! Story entity - a short post shared by a teacher

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Story entity
///
/// `like_count` is denormalized and maintained transactionally by the
/// reaction toggle; `comment_count` and `view_count` are best-effort
/// unlocked increments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub like_count: i32,
    pub comment_count: i32,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    /// Create a new story with zeroed counters
    pub fn new(id: Snowflake, author_id: Snowflake, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            content,
            image_url: None,
            like_count: 0,
            comment_count: 0,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_story_counters_start_at_zero() {
        let story = Story::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "Fractions with pizza".to_string(),
            "Cut a pizza into eighths...".to_string(),
        );
        assert_eq!(story.like_count, 0);
        assert_eq!(story.comment_count, 0);
        assert_eq!(story.view_count, 0);
    }

    #[test]
    fn test_authorship_check() {
        let story = Story::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "t".to_string(),
            "c".to_string(),
        );
        assert!(story.is_authored_by(Snowflake::new(2)));
        assert!(!story.is_authored_by(Snowflake::new(3)));
    }
}
