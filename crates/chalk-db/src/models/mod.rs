//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod document;
mod follow;
mod notification;
mod reaction;
mod story;
mod user;

pub use comment::{CommentModel, CommentVoteModel};
pub use document::DocumentModel;
pub use follow::FollowModel;
pub use notification::NotificationModel;
pub use reaction::{ReactionModel, ReactionWithUserModel};
pub use story::StoryModel;
pub use user::UserModel;
