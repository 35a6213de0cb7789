use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Achievement;

/// All achievements of an athlete with the summed points
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementListResponse {
    pub athlete_id: Uuid,
    pub total_points: i64,
    pub achievements: Vec<Achievement>,
}

impl AchievementListResponse {
    pub fn new(athlete_id: Uuid, achievements: Vec<Achievement>) -> Self {
        let total_points = achievements.iter().map(|a| a.points as i64).sum();
        Self {
            athlete_id,
            total_points,
            achievements,
        }
    }
}

/// Achievements unlocked by an explicit evaluation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementCheckResponse {
    pub unlocked: Vec<Achievement>,
}
