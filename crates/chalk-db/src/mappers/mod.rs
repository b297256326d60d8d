//! Entity to model mappers
//!
//! Conversions between domain entities (chalk-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod comment;
mod document;
mod follow;
mod notification;
mod reaction;
mod story;
mod user;

pub use comment::CommentInsert;
pub use document::DocumentInsert;
pub use notification::NotificationInsert;
pub use story::StoryInsert;
pub use user::UserInsert;
