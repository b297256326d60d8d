//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    /// Avatar URL or null to remove
    pub avatar: Option<String>,
}

// ============================================================================
// Story Requests
// ============================================================================

/// Create story request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStoryRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    /// Opaque image URL supplied by the client
    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,
}

/// Update story request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStoryRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: Option<String>,

    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
///
/// `parent_id` (Snowflake as string) makes this a reply; it must point
/// at a top-level comment on the same story.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    pub parent_id: Option<String>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle reaction request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReactionRequest {
    /// "story" or "comment"
    pub target_type: String,

    /// Target Snowflake as string
    pub target_id: String,

    /// One of the seven reaction kinds
    pub reaction_type: String,
}

// ============================================================================
// Document Requests
// ============================================================================

/// Share document request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Opaque file URL supplied by the client
    #[validate(length(min = 1, max = 2048, message = "File URL must be 1-2048 characters"))]
    pub file_url: String,

    #[validate(length(max = 100, message = "Subject must be at most 100 characters"))]
    pub subject: Option<String>,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Set user active flag (admin moderation)
#[derive(Debug, Clone, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}
