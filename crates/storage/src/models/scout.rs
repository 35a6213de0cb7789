use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Scout {
    pub scout_id: Uuid,
    pub user_id: String,
    pub full_name: String,
    pub organization: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
