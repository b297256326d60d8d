//! Value objects - immutable types that represent domain concepts

mod reaction_type;
mod role;
mod snowflake;
mod target;

pub use reaction_type::ReactionType;
pub use role::UserRole;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use target::{Target, TargetKind};
