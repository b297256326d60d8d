//! Notification handlers
//!
//! Endpoints for the caller's notification inbox.

use axum::{
    extract::{Path, State},
    Json,
};
use chalk_service::{
    MessageResponse, NotificationResponse, NotificationService, PaginatedResponse,
    UnreadCountResponse,
};

use crate::extractors::{AuthUser, IdPath, Page};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List the caller's notifications, newest first
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let response = service.list(auth.user_id, page.page, page.per_page).await?;
    Ok(Json(response))
}

/// Unread notification count
///
/// GET /notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let unread = service.unread_count(auth.user_id).await?;
    Ok(Json(UnreadCountResponse { unread }))
}

/// Mark one notification read (recipient only)
///
/// PATCH /notifications/{id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let id = path.id()?;

    let service = NotificationService::new(state.service_context());
    service.mark_read(auth.user_id, id).await?;
    Ok(NoContent)
}

/// Mark all of the caller's notifications read
///
/// POST /notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = NotificationService::new(state.service_context());
    let updated = service.mark_all_read(auth.user_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "{updated} notifications marked read"
    ))))
}
