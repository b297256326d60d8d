//! User entity <-> model mapper

use chalk_core::entities::User;
use chalk_core::value_objects::{Snowflake, UserRole};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            bio: model.bio,
            avatar: model.avatar,
            role: UserRole::parse(&model.role),
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert User entity reference to values for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub bio: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub role: &'static str,
    pub is_active: bool,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            email: &user.email,
            password_hash,
            bio: user.bio.as_deref(),
            avatar: user.avatar.as_deref(),
            role: user.role.as_str(),
            is_active: user.is_active,
        }
    }
}
