//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("teacher{suffix}"),
            email: format!("teacher{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub created_at: String,
}

/// Profile response with social counters
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub follower_count: i64,
    pub following_count: i64,
    pub story_count: i64,
}

/// Create story request
#[derive(Debug, Serialize)]
pub struct CreateStoryRequest {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

impl CreateStoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Classroom story {suffix}"),
            content: "Today my students surprised me.".to_string(),
            image_url: None,
        }
    }
}

/// Story response
#[derive(Debug, Deserialize)]
pub struct StoryResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub like_count: i32,
    pub comment_count: i32,
    pub view_count: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub parent_id: Option<String>,
}

impl CreateCommentRequest {
    pub fn top_level(content: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: None,
        }
    }

    pub fn reply(content: &str, parent_id: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: Some(parent_id.to_string()),
        }
    }
}

/// Comment response with nested replies
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub story_id: String,
    pub parent_id: Option<String>,
    pub content: String,
    pub author: UserResponse,
    pub upvotes: i64,
    pub downvotes: i64,
    pub vote_score: i64,
    pub created_at: String,
    pub replies: Vec<CommentResponse>,
}

/// Reaction toggle request
#[derive(Debug, Serialize)]
pub struct CreateReactionRequest {
    pub target_type: String,
    pub target_id: String,
    pub reaction_type: String,
}

impl CreateReactionRequest {
    pub fn story(story_id: &str, reaction_type: &str) -> Self {
        Self {
            target_type: "story".to_string(),
            target_id: story_id.to_string(),
            reaction_type: reaction_type.to_string(),
        }
    }

    pub fn comment(comment_id: &str, reaction_type: &str) -> Self {
        Self {
            target_type: "comment".to_string(),
            target_id: comment_id.to_string(),
            reaction_type: reaction_type.to_string(),
        }
    }
}

/// Reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub id: String,
    pub user_id: String,
    pub target_type: String,
    pub target_id: String,
    pub reaction_type: String,
    pub created_at: String,
}

/// Reaction toggle outcome; `reaction` is null when toggled off
#[derive(Debug, Deserialize)]
pub struct ToggleReactionResponse {
    pub message: String,
    pub reaction: Option<ReactionResponse>,
}

/// Create document request
#[derive(Debug, Serialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub subject: Option<String>,
}

impl CreateDocumentRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Lesson plan {suffix}"),
            description: Some("Fractions for fourth grade".to_string()),
            file_url: format!("https://files.example.com/lesson-{suffix}.pdf"),
            subject: Some("math".to_string()),
        }
    }
}

/// Document response
#[derive(Debug, Deserialize)]
pub struct DocumentResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub subject: Option<String>,
    pub save_count: i32,
    pub created_at: String,
}

/// Notification response
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub actor_id: String,
    pub notification_type: String,
    pub entity_type: String,
    pub entity_id: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

/// Unread counter response
#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

/// Simple message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Paginated listing envelope
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Error response envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
