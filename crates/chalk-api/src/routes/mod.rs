//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    admin, auth, comments, documents, health, notifications, reactions, stories, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(story_routes())
        .merge(comment_routes())
        .merge(reaction_routes())
        .merge(document_routes())
        .merge(notification_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User and follow routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::get_current_user))
        .route("/users/me", patch(users::update_current_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/stories", get(users::get_user_stories))
        .route("/users/:user_id/followers", get(users::get_followers))
        .route("/users/:user_id/following", get(users::get_following))
        .route("/users/:user_id/follow", post(users::follow_user))
        .route("/users/:user_id/follow", delete(users::unfollow_user))
}

/// Story routes
fn story_routes() -> Router<AppState> {
    Router::new()
        .route("/stories", get(stories::list_stories))
        .route("/stories", post(stories::create_story))
        .route("/stories/feed", get(stories::get_feed))
        .route("/stories/:id", get(stories::get_story))
        .route("/stories/:id", patch(stories::update_story))
        .route("/stories/:id", delete(stories::delete_story))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments/stories/:story_id/comments",
            get(comments::list_comments),
        )
        .route(
            "/comments/stories/:story_id/comments",
            post(comments::create_comment),
        )
        .route("/comments/:id", delete(comments::delete_comment))
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reactions/:target_type/:target_id",
            get(reactions::list_reactions),
        )
        .route("/reactions", post(reactions::toggle_reaction))
        .route("/reactions/:id", delete(reactions::delete_reaction))
}

/// Document routes
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(documents::list_documents))
        .route("/documents", post(documents::create_document))
        .route("/documents/:id", get(documents::get_document))
        .route("/documents/:id", delete(documents::delete_document))
        .route("/documents/:id/save", post(documents::save_document))
        .route("/documents/:id/save", delete(documents::unsave_document))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/unread-count",
            get(notifications::unread_count),
        )
        .route(
            "/notifications/:id/read",
            patch(notifications::mark_notification_read),
        )
        .route(
            "/notifications/read-all",
            post(notifications::mark_all_read),
        )
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/:user_id/active", patch(admin::set_user_active))
        .route("/admin/stories/:id", delete(admin::delete_story))
        .route("/admin/comments/:id", delete(admin::delete_comment))
}
