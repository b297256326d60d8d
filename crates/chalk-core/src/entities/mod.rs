//! Domain entities - core business objects

mod comment;
mod document;
mod follow;
mod notification;
mod reaction;
mod story;
mod user;

pub use comment::Comment;
pub use document::Document;
pub use follow::Follow;
pub use notification::{Notification, NotificationEntity, NotificationType};
pub use reaction::Reaction;
pub use story::Story;
pub use user::User;
