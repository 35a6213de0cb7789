use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Achievement, AchievementType};

const ACHIEVEMENT_COLUMNS: &str =
    "achievement_id, athlete_id, achievement_type, title, description, icon, points, unlocked_at";

pub struct AchievementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AchievementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_athlete(&self, athlete_id: Uuid) -> Result<Vec<Achievement>> {
        let achievements = sqlx::query_as::<_, Achievement>(&format!(
            "SELECT {} FROM achievements WHERE athlete_id = $1 ORDER BY unlocked_at DESC",
            ACHIEVEMENT_COLUMNS
        ))
        .bind(athlete_id)
        .fetch_all(self.pool)
        .await?;

        Ok(achievements)
    }

    /// Insert an achievement from its template.
    ///
    /// Returns `None` when the athlete already holds this achievement type.
    pub async fn create(
        &self,
        athlete_id: Uuid,
        achievement_type: AchievementType,
    ) -> Result<Option<Achievement>> {
        let template = achievement_type.template();

        let achievement = sqlx::query_as::<_, Achievement>(&format!(
            r#"
            INSERT INTO achievements (athlete_id, achievement_type, title, description, icon, points)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (athlete_id, achievement_type) DO NOTHING
            RETURNING {}
            "#,
            ACHIEVEMENT_COLUMNS
        ))
        .bind(athlete_id)
        .bind(achievement_type)
        .bind(template.title)
        .bind(template.description)
        .bind(template.icon)
        .bind(template.points)
        .fetch_optional(self.pool)
        .await?;

        Ok(achievement)
    }

    pub async fn total_points(&self, athlete_id: Uuid) -> Result<i64> {
        let points = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(points), 0)::bigint FROM achievements WHERE athlete_id = $1",
        )
        .bind(athlete_id)
        .fetch_one(self.pool)
        .await?;

        Ok(points)
    }
}
