//! # chalk-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Document, Follow, Notification, NotificationEntity, NotificationType, Reaction,
    Story, User,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, CommentWithVotes, DocumentRepository, FollowRepository,
    NotificationRepository, ReactionRepository, RepoResult, StoryRepository, ToggleOutcome,
    UserRepository,
};
pub use value_objects::{
    ReactionType, Snowflake, SnowflakeGenerator, SnowflakeParseError, Target, TargetKind,
    UserRole,
};
