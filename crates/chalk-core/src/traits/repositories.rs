//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Operations that must be atomic (the
//! reaction toggle, counter maintenance) are expressed as single trait
//! methods so implementations can wrap them in one transaction.

use async_trait::async_trait;

use crate::entities::{
    Comment, Document, Follow, Notification, NotificationEntity, NotificationType, Reaction,
    Story, User,
};
use crate::error::DomainError;
use crate::value_objects::{ReactionType, Snowflake, Target};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Flip the active flag (admin moderation)
    async fn set_active(&self, id: Snowflake, is_active: bool) -> RepoResult<()>;

    /// List users, newest first (admin surface)
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<User>>;

    /// Total user count
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Story Repository
// ============================================================================

#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Find story by ID (active only)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Story>>;

    /// Create a new story
    async fn create(&self, story: &Story) -> RepoResult<()>;

    /// Update title/content/image of an existing story
    async fn update(&self, story: &Story) -> RepoResult<()>;

    /// Soft delete a story
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// List active stories, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Story>>;

    /// Total active story count
    async fn count(&self) -> RepoResult<i64>;

    /// List one author's active stories, newest first
    async fn list_by_author(&self, author_id: Snowflake, limit: i64, offset: i64)
        -> RepoResult<Vec<Story>>;

    /// Count one author's active stories
    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64>;

    /// List stories from authors the user follows, newest first
    async fn list_feed(&self, follower_id: Snowflake, limit: i64, offset: i64)
        -> RepoResult<Vec<Story>>;

    /// Count stories in the user's feed
    async fn count_feed(&self, follower_id: Snowflake) -> RepoResult<i64>;

    /// Unlocked `view_count + 1`; lost updates are acceptable
    async fn increment_view_count(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// A comment joined with its author and active vote tallies, as loaded
/// for the story comment listing
#[derive(Debug, Clone)]
pub struct CommentWithVotes {
    pub comment: Comment,
    pub author: User,
    pub upvotes: i64,
    pub downvotes: i64,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID (active only)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Insert the comment and bump the story's `comment_count`,
    /// atomically
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Soft delete the comment and decrement the story's
    /// `comment_count` (floored at zero), atomically
    async fn delete(&self, id: Snowflake, story_id: Snowflake) -> RepoResult<()>;

    /// Load every active comment on the story with author and vote
    /// tallies, ordered `created_at ASC, id ASC`
    async fn list_for_story(&self, story_id: Snowflake) -> RepoResult<Vec<CommentWithVotes>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Outcome of one toggle transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No active reaction existed; a new row was inserted
    Created(Reaction),
    /// An active reaction of a different type was switched in place
    Switched(Reaction),
    /// An active reaction of the same type was toggled off
    Removed,
}

impl ToggleOutcome {
    /// The active reaction after the toggle, if any
    pub fn reaction(&self) -> Option<&Reaction> {
        match self {
            Self::Created(r) | Self::Switched(r) => Some(r),
            Self::Removed => None,
        }
    }

    /// True only when a brand-new reaction row was inserted (the case
    /// that produces a notification)
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Run the full toggle state machine in one transaction.
    ///
    /// The candidate row for (`user_id`, target) is locked with
    /// `SELECT ... FOR UPDATE` including soft-deleted rows, then:
    /// soft-deleted -> hard-delete and treat as absent; same type ->
    /// soft-delete and decrement the story `like_count`; different
    /// type -> update in place; absent -> insert `new_id` and
    /// increment the story `like_count`. Counter changes apply to
    /// story targets only.
    async fn toggle(
        &self,
        new_id: Snowflake,
        user_id: Snowflake,
        target: Target,
        reaction_type: ReactionType,
    ) -> RepoResult<ToggleOutcome>;

    /// Find an active reaction by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Soft-delete the reaction and, for story targets, decrement
    /// `like_count` when it is positive, atomically
    async fn delete(&self, reaction: &Reaction) -> RepoResult<()>;

    /// List active reactions on a target with their authors, newest
    /// first
    async fn list_for_target(
        &self,
        target: Target,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<(Reaction, User)>>;

    /// Count active reactions on a target
    async fn count_for_target(&self, target: Target) -> RepoResult<i64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// Find notification by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Notification>>;

    /// True if an unread notification already exists for the exact
    /// (recipient, actor, type, entity) tuple
    async fn unread_exists(
        &self,
        user_id: Snowflake,
        actor_id: Snowflake,
        notification_type: NotificationType,
        entity_type: NotificationEntity,
        entity_id: Snowflake,
    ) -> RepoResult<bool>;

    /// List a user's notifications, newest first
    async fn list_for_user(&self, user_id: Snowflake, limit: i64, offset: i64)
        -> RepoResult<Vec<Notification>>;

    /// Total notification count for a user
    async fn count_for_user(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Unread notification count for a user
    async fn count_unread(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Mark one notification read
    async fn mark_read(&self, id: Snowflake) -> RepoResult<()>;

    /// Mark all of a user's notifications read; returns rows affected
    async fn mark_all_read(&self, user_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert a follow edge; duplicate pairs surface as
    /// `DomainError::AlreadyFollowing`
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Remove a follow edge; absent pairs surface as
    /// `DomainError::FollowNotFound`
    async fn delete(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<()>;

    /// True if `follower_id` currently follows `followee_id`
    async fn exists(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool>;

    /// List the users following `user_id`
    async fn list_followers(&self, user_id: Snowflake, limit: i64, offset: i64)
        -> RepoResult<Vec<User>>;

    /// List the users `user_id` follows
    async fn list_following(&self, user_id: Snowflake, limit: i64, offset: i64)
        -> RepoResult<Vec<User>>;

    /// Number of followers of `user_id`
    async fn count_followers(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Number of users `user_id` follows
    async fn count_following(&self, user_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Document Repository
// ============================================================================

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Find document by ID (active only)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Document>>;

    /// Create a new document
    async fn create(&self, document: &Document) -> RepoResult<()>;

    /// Soft delete a document
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// List active documents, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Document>>;

    /// Total active document count
    async fn count(&self) -> RepoResult<i64>;

    /// Record a save and bump `save_count`; duplicates surface as
    /// `DomainError::AlreadySaved`
    async fn save(&self, user_id: Snowflake, document_id: Snowflake) -> RepoResult<()>;

    /// Remove a save and decrement `save_count` when positive; absent
    /// saves surface as `DomainError::DocumentNotFound`
    async fn unsave(&self, user_id: Snowflake, document_id: Snowflake) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_reaction() -> Reaction {
        Reaction {
            id: Snowflake::new(1),
            user_id: Snowflake::new(2),
            target: Target::story(Snowflake::new(3)),
            reaction_type: ReactionType::Like,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_toggle_outcome_reaction_accessor() {
        let r = sample_reaction();
        assert!(ToggleOutcome::Created(r.clone()).reaction().is_some());
        assert!(ToggleOutcome::Switched(r.clone()).reaction().is_some());
        assert!(ToggleOutcome::Removed.reaction().is_none());
    }

    #[test]
    fn test_only_created_notifies() {
        let r = sample_reaction();
        assert!(ToggleOutcome::Created(r.clone()).is_created());
        assert!(!ToggleOutcome::Switched(r).is_created());
        assert!(!ToggleOutcome::Removed.is_created());
    }
}
