//! Repository implementations

pub mod comment;
pub mod document;
pub mod error;
pub mod follow;
pub mod notification;
pub mod reaction;
pub mod story;
pub mod user;

pub use comment::PgCommentRepository;
pub use document::PgDocumentRepository;
pub use follow::PgFollowRepository;
pub use notification::PgNotificationRepository;
pub use reaction::PgReactionRepository;
pub use story::PgStoryRepository;
pub use user::PgUserRepository;
