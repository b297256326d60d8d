//! Database layer
//!
//! PostgreSQL persistence for the platform: connection pooling,
//! migrations, row models, entity mappers, and the repository
//! implementations behind the domain traits.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig};
pub use repositories::{
    PgCommentRepository, PgDocumentRepository, PgFollowRepository, PgNotificationRepository,
    PgReactionRepository, PgStoryRepository, PgUserRepository,
};
pub use sqlx::PgPool;
