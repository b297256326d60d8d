//! Reaction entity - one user's active reaction on a story or comment

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionType, Snowflake, Target};

/// Reaction entity
///
/// Invariant: a user holds at most one active reaction per target.
/// Toggling the same type off soft-deletes the row; the entity only
/// ever represents the active state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub target: Target,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new reaction
    pub fn new(id: Snowflake, user_id: Snowflake, target: Target, reaction_type: ReactionType) -> Self {
        Self {
            id,
            user_id,
            target,
            reaction_type,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_ownership() {
        let r = Reaction::new(
            Snowflake::new(1),
            Snowflake::new(5),
            Target::story(Snowflake::new(9)),
            ReactionType::Love,
        );
        assert!(r.is_owned_by(Snowflake::new(5)));
        assert!(!r.is_owned_by(Snowflake::new(6)));
        assert!(r.target.is_story());
    }
}
