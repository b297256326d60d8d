//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod context;
pub mod document;
pub mod error;
pub mod follow;
pub mod notification;
pub mod reaction;
pub mod story;
pub mod user;

// Re-export all services for convenience
pub use admin::AdminService;
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use document::DocumentService;
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use notification::NotificationService;
pub use reaction::ReactionService;
pub use story::StoryService;
pub use user::UserService;
