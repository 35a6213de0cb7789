use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const KIND_ACHIEVEMENT_UNLOCKED: &str = "achievement_unlocked";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub notification_id: Uuid,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: chrono::NaiveDateTime,
}
