//! Follow entity <-> model mapper

use chalk_core::entities::Follow;
use chalk_core::value_objects::Snowflake;

use crate::models::FollowModel;

/// Convert FollowModel to Follow entity
impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            follower_id: Snowflake::new(model.follower_id),
            followee_id: Snowflake::new(model.followee_id),
            created_at: model.created_at,
        }
    }
}
