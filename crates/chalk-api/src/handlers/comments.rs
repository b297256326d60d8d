//! Comment handlers
//!
//! Endpoints for the per-story comment thread.

use axum::{
    extract::{Path, State},
    Json,
};
use chalk_service::{CommentResponse, CommentService, CreateCommentRequest, PaginatedResponse};

use crate::extractors::{AuthUser, IdPath, Page, StoryIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a story's comments ranked by votes
///
/// GET /comments/stories/{story_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(path): Path<StoryIdPath>,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<CommentResponse>>> {
    let story_id = path.story_id()?;

    let service = CommentService::new(state.service_context());
    let response = service.list(story_id, page.page, page.per_page).await?;
    Ok(Json(response))
}

/// Create a comment or reply on a story
///
/// POST /comments/stories/{story_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<StoryIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let story_id = path.story_id()?;

    let service = CommentService::new(state.service_context());
    let response = service.create(auth.user_id, story_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a comment (author or admin)
///
/// DELETE /comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = CommentService::new(state.service_context());
    service.delete(auth.user_id, id).await?;
    Ok(NoContent)
}
