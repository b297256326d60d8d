//! Comment entity - discussion under a story, one level of nesting

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
///
/// `parent_id` is `None` for a top-level comment and must point at a
/// top-level comment on the same story for a reply. Vote score is never
/// stored; it is computed from reaction rows at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub story_id: Snowflake,
    pub author_id: Snowflake,
    pub parent_id: Option<Snowflake>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level comment
    pub fn new(id: Snowflake, story_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            story_id,
            author_id,
            parent_id: None,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to a top-level comment
    pub fn new_reply(
        id: Snowflake,
        story_id: Snowflake,
        author_id: Snowflake,
        parent_id: Snowflake,
        content: String,
    ) -> Self {
        let mut comment = Self::new(id, story_id, author_id, content);
        comment.parent_id = Some(parent_id);
        comment
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
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
    fn test_top_level_comment() {
        let c = Comment::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            "Great idea!".to_string(),
        );
        assert!(!c.is_reply());
    }

    #[test]
    fn test_reply_carries_parent() {
        let c = Comment::new_reply(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            Snowflake::new(4),
            "Agreed".to_string(),
        );
        assert!(c.is_reply());
        assert_eq!(c.parent_id, Some(Snowflake::new(4)));
    }
}
