//! Document handlers
//!
//! Endpoints for shared teaching materials and the save/unsave pair.

use axum::{
    extract::{Path, State},
    Json,
};
use chalk_service::{
    CreateDocumentRequest, DocumentResponse, DocumentService, MessageResponse, PaginatedResponse,
};

use crate::extractors::{AuthUser, IdPath, Page, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List documents, newest first
///
/// GET /documents
pub async fn list_documents(
    State(state): State<AppState>,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<DocumentResponse>>> {
    let service = DocumentService::new(state.service_context());
    let response = service.list(page.page, page.per_page).await?;
    Ok(Json(response))
}

/// Share a document
///
/// POST /documents
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateDocumentRequest>,
) -> ApiResult<Created<Json<DocumentResponse>>> {
    let service = DocumentService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a document
///
/// GET /documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<DocumentResponse>> {
    let id = path.id()?;

    let service = DocumentService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}

/// Delete a document (owner or admin)
///
/// DELETE /documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = DocumentService::new(state.service_context());
    service.delete(auth.user_id, id).await?;
    Ok(NoContent)
}

/// Save a document to the caller's collection
///
/// POST /documents/{id}/save
pub async fn save_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let id = path.id()?;

    let service = DocumentService::new(state.service_context());
    service.save(auth.user_id, id).await?;
    Ok(Created(Json(MessageResponse::new("Document saved"))))
}

/// Remove a document from the caller's collection
///
/// DELETE /documents/{id}/save
pub async fn unsave_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = DocumentService::new(state.service_context());
    service.unsave(auth.user_id, id).await?;
    Ok(NoContent)
}
