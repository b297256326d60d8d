//! Notification entity - an event delivered to a user's inbox

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Snowflake;

/// The events that produce notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    ReactionOnStory,
    CommentOnStory,
    ReplyToComment,
    NewFollower,
}

impl NotificationType {
    /// Storage representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReactionOnStory => "reaction_on_story",
            Self::CommentOnStory => "comment_on_story",
            Self::ReplyToComment => "reply_to_comment",
            Self::NewFollower => "new_follower",
        }
    }

    /// Parse the storage representation; `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reaction_on_story" => Some(Self::ReactionOnStory),
            "comment_on_story" => Some(Self::CommentOnStory),
            "reply_to_comment" => Some(Self::ReplyToComment),
            "new_follower" => Some(Self::NewFollower),
            _ => None,
        }
    }

    /// Only repeat reactions on the same story are collapsed while the
    /// earlier notification is still unread
    #[inline]
    pub const fn dedups_while_unread(self) -> bool {
        matches!(self, Self::ReactionOnStory)
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of entity a notification links back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEntity {
    Story,
    Comment,
    User,
}

impl NotificationEntity {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Comment => "comment",
            Self::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "story" => Some(Self::Story),
            "comment" => Some(Self::Comment),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    /// Recipient
    pub user_id: Snowflake,
    /// The user whose action triggered the notification
    pub actor_id: Snowflake,
    pub notification_type: NotificationType,
    pub entity_type: NotificationEntity,
    pub entity_id: Snowflake,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread notification
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        actor_id: Snowflake,
        notification_type: NotificationType,
        entity_type: NotificationEntity,
        entity_id: Snowflake,
        message: String,
    ) -> Self {
        Self {
            id,
            user_id,
            actor_id,
            notification_type,
            entity_type,
            entity_id,
            message,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// True when the recipient and the actor are the same user, which
    /// suppresses the notification entirely
    #[inline]
    pub fn is_self_notification(&self) -> bool {
        self.user_id == self.actor_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_roundtrip() {
        for t in [
            NotificationType::ReactionOnStory,
            NotificationType::CommentOnStory,
            NotificationType::ReplyToComment,
            NotificationType::NewFollower,
        ] {
            assert_eq!(NotificationType::parse(t.as_str()), Some(t));
        }
        assert_eq!(NotificationType::parse("mention"), None);
    }

    #[test]
    fn test_only_story_reactions_dedup() {
        assert!(NotificationType::ReactionOnStory.dedups_while_unread());
        assert!(!NotificationType::CommentOnStory.dedups_while_unread());
        assert!(!NotificationType::NewFollower.dedups_while_unread());
    }

    #[test]
    fn test_new_notification_is_unread() {
        let n = Notification::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            NotificationType::NewFollower,
            NotificationEntity::User,
            Snowflake::new(3),
            "pat started following you".to_string(),
        );
        assert!(!n.is_read);
        assert!(!n.is_self_notification());
    }

    #[test]
    fn test_self_notification_detection() {
        let n = Notification::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(2),
            NotificationType::ReactionOnStory,
            NotificationEntity::Story,
            Snowflake::new(9),
            "you liked your own story".to_string(),
        );
        assert!(n.is_self_notification());
    }
}
