//! User handlers
//!
//! Endpoints for profiles, per-user story listings, and the follow edge.

use axum::{
    extract::{Path, State},
    Json,
};
use chalk_service::{
    CurrentUserResponse, FollowService, MessageResponse, PaginatedResponse, ProfileResponse,
    StoryResponse, UpdateProfileRequest, UserResponse, UserService,
};

use crate::extractors::{AuthUser, Page, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get current user
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user's profile
///
/// PATCH /users/me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Get a public profile with social counters
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service.get_profile(user_id).await?;
    Ok(Json(response))
}

/// List a user's stories
///
/// GET /users/{user_id}/stories
pub async fn get_user_stories(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<StoryResponse>>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service
        .list_stories(user_id, page.page, page.per_page)
        .await?;
    Ok(Json(response))
}

/// List a user's followers
///
/// GET /users/{user_id}/followers
pub async fn get_followers(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let user_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    let response = service
        .list_followers(user_id, page.page, page.per_page)
        .await?;
    Ok(Json(response))
}

/// List who a user follows
///
/// GET /users/{user_id}/following
pub async fn get_following(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let user_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    let response = service
        .list_following(user_id, page.page, page.per_page)
        .await?;
    Ok(Json(response))
}

/// Follow a user
///
/// POST /users/{user_id}/follow
pub async fn follow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let followee_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    service.follow(auth.user_id, followee_id).await?;
    Ok(Created(Json(MessageResponse::new("Now following"))))
}

/// Unfollow a user
///
/// DELETE /users/{user_id}/follow
pub async fn unfollow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<NoContent> {
    let followee_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    service.unfollow(auth.user_id, followee_id).await?;
    Ok(NoContent)
}
