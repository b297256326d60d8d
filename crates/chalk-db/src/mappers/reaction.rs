//! Reaction entity <-> model mapper

use chalk_core::entities::{Reaction, User};
use chalk_core::value_objects::{ReactionType, Snowflake, Target, TargetKind, UserRole};

use crate::models::{ReactionModel, ReactionWithUserModel};

// The database constrains target_type and reaction_type with CHECK
// clauses, so the parse fallbacks below are unreachable on well-formed
// rows; they keep the infallible From contract.

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        let kind = TargetKind::parse(&model.target_type).unwrap_or(TargetKind::Story);
        Reaction {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            target: Target::new(kind, Snowflake::new(model.target_id)),
            reaction_type: ReactionType::parse(&model.reaction_type).unwrap_or(ReactionType::Like),
            created_at: model.created_at,
        }
    }
}

/// Split the joined listing row into reaction and reacting user
impl From<ReactionWithUserModel> for (Reaction, User) {
    fn from(model: ReactionWithUserModel) -> Self {
        let kind = TargetKind::parse(&model.target_type).unwrap_or(TargetKind::Story);
        let reaction = Reaction {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            target: Target::new(kind, Snowflake::new(model.target_id)),
            reaction_type: ReactionType::parse(&model.reaction_type).unwrap_or(ReactionType::Like),
            created_at: model.created_at,
        };
        let user = User {
            id: Snowflake::new(model.user_id),
            username: model.user_username,
            email: model.user_email,
            bio: model.user_bio,
            avatar: model.user_avatar,
            role: UserRole::parse(&model.user_role),
            is_active: model.user_is_active,
            created_at: model.user_created_at,
            updated_at: model.user_updated_at,
        };
        (reaction, user)
    }
}
