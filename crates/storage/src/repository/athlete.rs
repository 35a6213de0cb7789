use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::athlete::{AthleteListFilter, CreateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, VerificationLevel};

const ATHLETE_COLUMNS: &str = r#"
    athlete_id, user_id, full_name, birth_date, city, state, position,
    dominant_foot, height_cm, weight_kg, current_team, verification_level,
    skills_assessment, profile_complete, created_at, updated_at
"#;

const PROFILE_ASSIGNMENTS: &str = r#"
    full_name = $2,
    birth_date = $3,
    city = $4,
    state = $5,
    position = $6,
    dominant_foot = $7,
    height_cm = $8,
    weight_kg = $9,
    current_team = $10,
    skills_assessment = $11,
    profile_complete = $12,
    updated_at = NOW()
"#;

const TIER_ASSIGNMENTS: &str = "verification_level = $2, updated_at = NOW()";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List athletes, highest verification tier first
    pub async fn list(&self, filter: &AthleteListFilter) -> Result<(Vec<Athlete>, i64)> {
        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM athletes WHERE 1=1");
        push_filters(&mut count_query, filter);
        let total_items = count_query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        let pagination = filter.pagination();
        let mut query = QueryBuilder::new(format!("SELECT {} FROM athletes WHERE 1=1", ATHLETE_COLUMNS));
        push_filters(&mut query, filter);
        query.push(" ORDER BY verification_level DESC, full_name LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let athletes = query
            .build_query_as::<Athlete>()
            .fetch_all(self.pool)
            .await?;

        Ok((athletes, total_items))
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        self.find_optional_by_id(id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn find_optional_by_id(&self, id: Uuid) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {} FROM athletes WHERE athlete_id = $1",
            ATHLETE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Find the athlete profile owned by a user account
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {} FROM athletes WHERE user_id = $1",
            ATHLETE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Create the athlete profile for `user_id`
    pub async fn create(&self, user_id: &str, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            INSERT INTO athletes (user_id, full_name, birth_date, city, state, position,
                                  dominant_foot, height_cm, weight_kg, current_team,
                                  skills_assessment, verification_level)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            ATHLETE_COLUMNS
        ))
        .bind(user_id)
        .bind(&req.full_name)
        .bind(req.birth_date)
        .bind(&req.city)
        .bind(&req.state)
        .bind(&req.position)
        .bind(&req.dominant_foot)
        .bind(req.height_cm)
        .bind(req.weight_kg)
        .bind(&req.current_team)
        .bind(sqlx::types::Json(&req.skills_assessment))
        .bind(VerificationLevel::default())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_message(
                "User already has an athlete profile",
                "Unknown reference",
            )
        })?;

        self.refresh_profile_complete(athlete).await
    }

    /// Persist the profile fields of `athlete`. The trust tier is left untouched.
    pub async fn update(&self, athlete: &Athlete) -> Result<Athlete> {
        let updated = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET {}
            WHERE athlete_id = $1
            RETURNING {}
            "#,
            PROFILE_ASSIGNMENTS, ATHLETE_COLUMNS
        ))
        .bind(athlete.athlete_id)
        .bind(&athlete.full_name)
        .bind(athlete.birth_date)
        .bind(&athlete.city)
        .bind(&athlete.state)
        .bind(&athlete.position)
        .bind(&athlete.dominant_foot)
        .bind(athlete.height_cm)
        .bind(athlete.weight_kg)
        .bind(&athlete.current_team)
        .bind(sqlx::types::Json(&athlete.skills_assessment))
        .bind(athlete.profile_complete)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(updated)
    }

    /// Move an athlete to another trust tier without touching the profile
    pub async fn set_verification_level(&self, id: Uuid, level: VerificationLevel) -> Result<Athlete> {
        let updated = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET {}
            WHERE athlete_id = $1
            RETURNING {}
            "#,
            TIER_ASSIGNMENTS, ATHLETE_COLUMNS
        ))
        .bind(id)
        .bind(level)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(updated)
    }

    /// Delete an athlete by ID, cascading to tests, views and achievements
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn refresh_profile_complete(&self, athlete: Athlete) -> Result<Athlete> {
        let complete = athlete.has_complete_profile();
        if complete == athlete.profile_complete {
            return Ok(athlete);
        }

        sqlx::query("UPDATE athletes SET profile_complete = $2 WHERE athlete_id = $1")
            .bind(athlete.athlete_id)
            .bind(complete)
            .execute(self.pool)
            .await?;

        Ok(Athlete {
            profile_complete: complete,
            ..athlete
        })
    }
}

fn push_filters(query: &mut QueryBuilder<'_, sqlx::Postgres>, filter: &AthleteListFilter) {
    if let Some(ref state) = filter.state {
        query.push(" AND state = ");
        query.push_bind(state.clone());
    }

    if let Some(ref position) = filter.position {
        query.push(" AND position ILIKE ");
        query.push_bind(position.clone());
    }

    if let Some(level) = filter.min_level {
        query.push(" AND verification_level >= ");
        query.push_bind(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned_columns(assignments: &str) -> Vec<&str> {
        assignments
            .split(',')
            .filter_map(|a| a.split('=').next())
            .map(str::trim)
            .collect()
    }

    #[test]
    fn test_profile_update_never_writes_the_tier() {
        let columns = assigned_columns(PROFILE_ASSIGNMENTS);
        assert!(!columns.contains(&"verification_level"));
        assert!(!columns.contains(&"user_id"));
        assert!(columns.contains(&"full_name"));
        assert!(columns.contains(&"profile_complete"));
    }

    #[test]
    fn test_profile_update_binds_line_up() {
        let columns = assigned_columns(PROFILE_ASSIGNMENTS);
        // athlete_id is $1, then one bind per assigned column except updated_at
        let placeholders = (2..=12).map(|n| format!("${}", n));
        for (column, placeholder) in columns.iter().zip(placeholders) {
            assert!(
                PROFILE_ASSIGNMENTS.contains(&format!("{} = {}", column, placeholder)),
                "{} is not bound to {}",
                column,
                placeholder
            );
        }
        assert_eq!(columns.last(), Some(&"updated_at"));
    }

    #[test]
    fn test_tier_change_never_writes_the_profile() {
        assert_eq!(
            assigned_columns(TIER_ASSIGNMENTS),
            vec!["verification_level", "updated_at"]
        );
    }
}
