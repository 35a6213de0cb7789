use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::Notification;

const NOTIFICATION_COLUMNS: &str =
    "notification_id, user_id, kind, title, message, read, created_at";

pub struct NotificationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: &str,
        kind: &str,
        title: &str,
        message: &str,
    ) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(&format!(
            r#"
            INSERT INTO notifications (user_id, kind, title, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            NOTIFICATION_COLUMNS
        ))
        .bind(user_id)
        .bind(kind)
        .bind(title)
        .bind(message)
        .fetch_one(self.pool)
        .await?;

        Ok(notification)
    }

    /// Notifications of a user, newest first, with the total count
    pub async fn list_for_user(
        &self,
        user_id: &str,
        pagination: &PaginationParams,
    ) -> Result<(Vec<Notification>, i64)> {
        let total_items = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::bigint FROM notifications WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        let notifications = sqlx::query_as::<_, Notification>(&format!(
            r#"
            SELECT {}
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
            NOTIFICATION_COLUMNS
        ))
        .bind(user_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(self.pool)
        .await?;

        Ok((notifications, total_items))
    }

    /// Mark one of the user's notifications as read
    pub async fn mark_read(&self, notification_id: Uuid, user_id: &str) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(&format!(
            r#"
            UPDATE notifications
            SET read = TRUE
            WHERE notification_id = $1 AND user_id = $2
            RETURNING {}
            "#,
            NOTIFICATION_COLUMNS
        ))
        .bind(notification_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(notification)
    }
}
