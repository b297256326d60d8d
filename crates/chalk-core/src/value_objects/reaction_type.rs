//! Reaction type - the fixed emoji/vote vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven reaction kinds a user can place on a story or comment
///
/// `Upvote` and `Downvote` are the pair the comment ranking is computed
/// from; the rest are emoji-style reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    Like,
    Love,
    Haha,
    Support,
    Sad,
    Upvote,
    Downvote,
}

impl ReactionType {
    /// Storage / wire representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Haha => "haha",
            Self::Support => "support",
            Self::Sad => "sad",
            Self::Upvote => "upvote",
            Self::Downvote => "downvote",
        }
    }

    /// Parse the wire representation; `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "love" => Some(Self::Love),
            "haha" => Some(Self::Haha),
            "support" => Some(Self::Support),
            "sad" => Some(Self::Sad),
            "upvote" => Some(Self::Upvote),
            "downvote" => Some(Self::Downvote),
            _ => None,
        }
    }

    /// True for the vote pair that feeds comment ranking
    #[inline]
    pub const fn is_vote(self) -> bool {
        matches!(self, Self::Upvote | Self::Downvote)
    }

    /// Verb phrase used when notifying a story author about this reaction
    pub const fn notification_verb(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Love => "loved",
            Self::Haha => "laughed at",
            Self::Support => "supported",
            Self::Sad => "reacted sadly to",
            Self::Upvote => "upvoted",
            Self::Downvote => "downvoted",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_variants() {
        for kind in [
            ReactionType::Like,
            ReactionType::Love,
            ReactionType::Haha,
            ReactionType::Support,
            ReactionType::Sad,
            ReactionType::Upvote,
            ReactionType::Downvote,
        ] {
            assert_eq!(ReactionType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ReactionType::parse("angry"), None);
    }

    #[test]
    fn test_vote_classification() {
        assert!(ReactionType::Upvote.is_vote());
        assert!(ReactionType::Downvote.is_vote());
        assert!(!ReactionType::Like.is_vote());
    }

    #[test]
    fn test_json_uses_snake_case() {
        let json = serde_json::to_string(&ReactionType::Upvote).unwrap();
        assert_eq!(json, "\"upvote\"");
        let back: ReactionType = serde_json::from_str("\"sad\"").unwrap();
        assert_eq!(back, ReactionType::Sad);
    }
}
