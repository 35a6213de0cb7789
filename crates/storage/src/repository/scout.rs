use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::scout::CreateScoutRequest;
use crate::error::{Result, StorageError};
use crate::models::Scout;

const SCOUT_COLUMNS: &str = "scout_id, user_id, full_name, organization, city, state, created_at";

pub struct ScoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Scout>> {
        let scouts = sqlx::query_as::<_, Scout>(&format!(
            "SELECT {} FROM scouts ORDER BY full_name",
            SCOUT_COLUMNS
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(scouts)
    }

    pub async fn find_by_id(&self, scout_id: Uuid) -> Result<Scout> {
        let scout = sqlx::query_as::<_, Scout>(&format!(
            "SELECT {} FROM scouts WHERE scout_id = $1",
            SCOUT_COLUMNS
        ))
        .bind(scout_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(scout)
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Scout>> {
        let scout = sqlx::query_as::<_, Scout>(&format!(
            "SELECT {} FROM scouts WHERE user_id = $1",
            SCOUT_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(scout)
    }

    pub async fn create(&self, user_id: &str, req: &CreateScoutRequest) -> Result<Scout> {
        let scout = sqlx::query_as::<_, Scout>(&format!(
            r#"
            INSERT INTO scouts (user_id, full_name, organization, city, state)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            SCOUT_COLUMNS
        ))
        .bind(user_id)
        .bind(&req.full_name)
        .bind(&req.organization)
        .bind(&req.city)
        .bind(&req.state)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .with_constraint_message("User is already registered as a scout", "Unknown reference")
        })?;

        Ok(scout)
    }
}
