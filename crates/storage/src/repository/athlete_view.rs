use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::AthleteView;

pub struct AthleteViewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteViewRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn record(&self, athlete_id: Uuid, scout_id: Uuid) -> Result<AthleteView> {
        let view = sqlx::query_as::<_, AthleteView>(
            r#"
            INSERT INTO athlete_views (athlete_id, scout_id)
            VALUES ($1, $2)
            RETURNING view_id, athlete_id, scout_id, viewed_at
            "#,
        )
        .bind(athlete_id)
        .bind(scout_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_message(
                "Duplicate view",
                "Athlete or scout does not exist",
            )
        })?;

        Ok(view)
    }

    pub async fn count_for_athlete(&self, athlete_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::bigint FROM athlete_views WHERE athlete_id = $1",
        )
        .bind(athlete_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
