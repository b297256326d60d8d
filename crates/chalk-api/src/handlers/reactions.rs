//! Reaction handlers
//!
//! Endpoints for the reaction toggle, explicit removal, and listings.

use axum::{
    extract::{Path, State},
    Json,
};
use chalk_service::{
    CreateReactionRequest, PaginatedResponse, ReactionService, ReactionWithUserResponse,
    ToggleReactionResponse,
};

use crate::extractors::{AuthUser, IdPath, Page, TargetPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Toggle a reaction on a story or comment
///
/// POST /reactions
pub async fn toggle_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReactionRequest>,
) -> ApiResult<Json<ToggleReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.toggle(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Remove the caller's reaction by ID
///
/// DELETE /reactions/{id}
pub async fn delete_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = ReactionService::new(state.service_context());
    service.delete(auth.user_id, id).await?;
    Ok(NoContent)
}

/// List reactions on a target with their authors
///
/// GET /reactions/{target_type}/{target_id}
pub async fn list_reactions(
    State(state): State<AppState>,
    Path(path): Path<TargetPath>,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<ReactionWithUserResponse>>> {
    let service = ReactionService::new(state.service_context());
    let response = service
        .list(&path.target_type, &path.target_id, page.page, page.per_page)
        .await?;
    Ok(Json(response))
}
