//! User role - teacher (regular member) or admin

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, controls access to the moderation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Teacher,
    Admin,
}

impl UserRole {
    /// Storage representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Parse the storage representation, defaulting unknown values to
    /// the unprivileged role
    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            _ => Self::Teacher,
        }
    }

    #[inline]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_teacher() {
        assert_eq!(UserRole::parse("admin"), UserRole::Admin);
        assert_eq!(UserRole::parse("teacher"), UserRole::Teacher);
        assert_eq!(UserRole::parse("superuser"), UserRole::Teacher);
    }

    #[test]
    fn test_admin_check() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Teacher.is_admin());
    }
}
