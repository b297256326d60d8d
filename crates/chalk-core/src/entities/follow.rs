//! Follow entity - a directed edge between two users

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Follow edge: `follower_id` follows `followee_id`
///
/// The pair is unique; self-follows are rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: Snowflake,
    pub followee_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower_id: Snowflake, followee_id: Snowflake) -> Self {
        Self {
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.followee_id
    }
}
