//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use chalk_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with a single id
#[derive(Debug, serde::Deserialize)]
pub struct IdPath {
    pub id: String,
}

impl IdPath {
    /// Parse id as Snowflake
    pub fn id(&self) -> Result<Snowflake, ApiError> {
        self.id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with story_id
#[derive(Debug, serde::Deserialize)]
pub struct StoryIdPath {
    pub story_id: String,
}

impl StoryIdPath {
    /// Parse story_id as Snowflake
    pub fn story_id(&self) -> Result<Snowflake, ApiError> {
        self.story_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid story_id format"))
    }
}

/// Path parameters for reaction targets
///
/// `target_type` is validated by the service; here it is carried verbatim.
#[derive(Debug, serde::Deserialize)]
pub struct TargetPath {
    pub target_type: String,
    pub target_id: String,
}
