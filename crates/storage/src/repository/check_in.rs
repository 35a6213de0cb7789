use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};

pub struct CheckInRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CheckInRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a check-in for `day`. Returns `false` if one already exists.
    pub async fn record(&self, athlete_id: Uuid, day: NaiveDate) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO check_ins (athlete_id, checked_in_on)
            VALUES ($1, $2)
            ON CONFLICT (athlete_id, checked_in_on) DO NOTHING
            "#,
        )
        .bind(athlete_id)
        .bind(day)
        .execute(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_message("Duplicate check-in", "Athlete does not exist")
        })?;

        Ok(result.rows_affected() == 1)
    }

    /// Check-in days on or after `since`, newest first
    pub async fn days_since(&self, athlete_id: Uuid, since: NaiveDate) -> Result<Vec<NaiveDate>> {
        let days = sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT checked_in_on
            FROM check_ins
            WHERE athlete_id = $1 AND checked_in_on >= $2
            ORDER BY checked_in_on DESC
            "#,
        )
        .bind(athlete_id)
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        Ok(days)
    }
}
