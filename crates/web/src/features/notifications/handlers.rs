use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    models::Notification,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::session::SessionContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(PaginationParams),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Notifications of the caller, newest first", body = PaginatedResponse<Notification>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(db): State<Database>,
    session: SessionContext,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (notifications, total_items) =
        services::list_notifications(db.pool(), &session.user_id, &pagination).await?;

    let response = PaginatedResponse::new(notifications, pagination, total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    params(
        ("notification_id" = Uuid, Path, description = "Notification ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = Notification),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications"
)]
pub async fn mark_read(
    State(db): State<Database>,
    Path(notification_id): Path<Uuid>,
    session: SessionContext,
) -> Result<Response, WebError> {
    let notification = services::mark_read(db.pool(), notification_id, &session.user_id).await?;

    Ok(Json(notification).into_response())
}
