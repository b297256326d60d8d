//! Reaction target - the story or comment a reaction attaches to

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Snowflake;

/// Kind of entity a reaction can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Story,
    Comment,
}

impl TargetKind {
    /// Storage / wire representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Comment => "comment",
        }
    }

    /// Parse the wire representation; `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "story" => Some(Self::Story),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-qualified reaction target: kind plus ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub kind: TargetKind,
    pub id: Snowflake,
}

impl Target {
    #[inline]
    pub const fn new(kind: TargetKind, id: Snowflake) -> Self {
        Self { kind, id }
    }

    #[inline]
    pub const fn story(id: Snowflake) -> Self {
        Self::new(TargetKind::Story, id)
    }

    #[inline]
    pub const fn comment(id: Snowflake) -> Self {
        Self::new(TargetKind::Comment, id)
    }

    /// True when the target is a story (the only kind that carries a
    /// denormalized like counter)
    #[inline]
    pub const fn is_story(&self) -> bool {
        matches!(self.kind, TargetKind::Story)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(TargetKind::parse("story"), Some(TargetKind::Story));
        assert_eq!(TargetKind::parse("comment"), Some(TargetKind::Comment));
        assert_eq!(TargetKind::parse("message"), None);
        assert_eq!(TargetKind::Story.as_str(), "story");
    }

    #[test]
    fn test_target_constructors() {
        let t = Target::story(Snowflake::new(9));
        assert!(t.is_story());
        assert_eq!(t.id, Snowflake::new(9));

        let t = Target::comment(Snowflake::new(10));
        assert!(!t.is_story());
        assert_eq!(t.to_string(), "comment:10");
    }
}
