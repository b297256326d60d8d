//! User entity - a teacher (or admin) account on the platform

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, UserRole};

/// User entity
///
/// The password hash lives in the persistence layer, never on the
/// entity, so it cannot leak through DTO mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active teacher account
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            bio: None,
            avatar: None,
            role: UserRole::Teacher,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Update profile fields, bumping `updated_at`
    pub fn apply_profile(&mut self, bio: Option<String>, avatar: Option<String>) {
        self.bio = bio;
        self.avatar = avatar;
        self.updated_at = Utc::now();
    }
}
