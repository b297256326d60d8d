//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, CommentWithVotes, DocumentRepository, FollowRepository,
    NotificationRepository, ReactionRepository, RepoResult, StoryRepository, ToggleOutcome,
    UserRepository,
};
