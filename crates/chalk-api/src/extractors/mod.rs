//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use pagination::{Page, PageParams};
pub use path::{IdPath, StoryIdPath, TargetPath, UserIdPath};
pub use validated::ValidatedJson;
