//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Story not found: {0}")]
    StoryNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Reaction not found: {0}")]
    ReactionNotFound(Snowflake),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Snowflake),

    #[error("Document not found: {0}")]
    DocumentNotFound(Snowflake),

    #[error("Not following this user")]
    FollowNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Replies cannot be nested more than one level")]
    ReplyTooDeep,

    #[error("Parent comment belongs to a different story")]
    ReplyStoryMismatch,

    #[error("Cannot follow yourself")]
    CannotFollowSelf,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the resource owner")]
    NotResourceOwner,

    #[error("Administrator privileges required")]
    AdminRequired,

    #[error("Account is deactivated")]
    AccountDisabled,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("Document already saved")]
    AlreadySaved,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::StoryNotFound(_) => "UNKNOWN_STORY",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",
            Self::DocumentNotFound(_) => "UNKNOWN_DOCUMENT",
            Self::FollowNotFound => "NOT_FOLLOWING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::ReplyTooDeep => "REPLY_TOO_DEEP",
            Self::ReplyStoryMismatch => "REPLY_STORY_MISMATCH",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",

            // Authorization
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::AccountDisabled => "ACCOUNT_DISABLED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",
            Self::AlreadySaved => "ALREADY_SAVED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::StoryNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReactionNotFound(_)
                | Self::NotificationNotFound(_)
                | Self::DocumentNotFound(_)
                | Self::FollowNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
                | Self::ReplyTooDeep
                | Self::ReplyStoryMismatch
                | Self::CannotFollowSelf
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotResourceOwner | Self::AdminRequired | Self::AccountDisabled
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::AlreadyFollowing
                | Self::AlreadySaved
        )
    }
}
