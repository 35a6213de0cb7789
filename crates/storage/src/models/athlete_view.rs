use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scout opened an athlete's profile. Rows are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteView {
    pub view_id: Uuid,
    pub athlete_id: Uuid,
    pub scout_id: Uuid,
    pub viewed_at: chrono::NaiveDateTime,
}
