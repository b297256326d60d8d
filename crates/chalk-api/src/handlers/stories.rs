//! Story handlers
//!
//! Endpoints for story CRUD, the global listing, and the followed feed.

use axum::{
    extract::{Path, State},
    Json,
};
use chalk_service::{
    CreateStoryRequest, PaginatedResponse, StoryResponse, StoryService, UpdateStoryRequest,
};

use crate::extractors::{AuthUser, IdPath, Page, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List stories, newest first
///
/// GET /stories
pub async fn list_stories(
    State(state): State<AppState>,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<StoryResponse>>> {
    let service = StoryService::new(state.service_context());
    let response = service.list(page.page, page.per_page).await?;
    Ok(Json(response))
}

/// Create a story
///
/// POST /stories
pub async fn create_story(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateStoryRequest>,
) -> ApiResult<Created<Json<StoryResponse>>> {
    let service = StoryService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Stories from followed authors
///
/// GET /stories/feed
pub async fn get_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<StoryResponse>>> {
    let service = StoryService::new(state.service_context());
    let response = service.feed(auth.user_id, page.page, page.per_page).await?;
    Ok(Json(response))
}

/// Get a story (counts the view)
///
/// GET /stories/{id}
pub async fn get_story(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<StoryResponse>> {
    let id = path.id()?;

    let service = StoryService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}

/// Update a story (author only)
///
/// PATCH /stories/{id}
pub async fn update_story(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateStoryRequest>,
) -> ApiResult<Json<StoryResponse>> {
    let id = path.id()?;

    let service = StoryService::new(state.service_context());
    let response = service.update(auth.user_id, id, request).await?;
    Ok(Json(response))
}

/// Delete a story (author or admin)
///
/// DELETE /stories/{id}
pub async fn delete_story(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = StoryService::new(state.service_context());
    service.delete(auth.user_id, id).await?;
    Ok(NoContent)
}
