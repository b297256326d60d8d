//! Admin handlers
//!
//! Moderation endpoints; the service enforces the admin role.

use axum::{
    extract::{Path, State},
    Json,
};
use chalk_service::{AdminService, PaginatedResponse, SetActiveRequest, UserResponse};

use crate::extractors::{AuthUser, IdPath, Page, UserIdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List all users
///
/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service
        .list_users(auth.user_id, page.page, page.per_page)
        .await?;
    Ok(Json(response))
}

/// Deactivate or reactivate a user account
///
/// PATCH /admin/users/{user_id}/active
pub async fn set_user_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    Json(request): Json<SetActiveRequest>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;

    let service = AdminService::new(state.service_context());
    service
        .set_user_active(auth.user_id, user_id, request.is_active)
        .await?;
    Ok(NoContent)
}

/// Remove any story
///
/// DELETE /admin/stories/{id}
pub async fn delete_story(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = AdminService::new(state.service_context());
    service.delete_story(auth.user_id, id).await?;
    Ok(NoContent)
}

/// Remove any comment
///
/// DELETE /admin/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = AdminService::new(state.service_context());
    service.delete_comment(auth.user_id, id).await?;
    Ok(NoContent)
}
