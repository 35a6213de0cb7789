use sqlx::PgPool;
use storage::{
    dto::common::PaginationParams, error::Result, models::Notification,
    repository::notification::NotificationRepository,
};
use uuid::Uuid;

/// Notifications of a user with the total count
pub async fn list_notifications(
    pool: &PgPool,
    user_id: &str,
    pagination: &PaginationParams,
) -> Result<(Vec<Notification>, i64)> {
    let repo = NotificationRepository::new(pool);
    repo.list_for_user(user_id, pagination).await
}

/// Mark one of the user's notifications as read
pub async fn mark_read(pool: &PgPool, notification_id: Uuid, user_id: &str) -> Result<Notification> {
    let repo = NotificationRepository::new(pool);
    repo.mark_read(notification_id, user_id).await
}
