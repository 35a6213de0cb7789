use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::performance_test::CreateTestRequest;
use crate::error::{Result, StorageError};
use crate::models::{PerformanceTest, TestType};
use crate::services::percentile::{self, BestResult};

const TEST_COLUMNS: &str =
    "test_id, athlete_id, test_type, result, ai_confidence, verified, created_at";

pub struct PerformanceTestRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PerformanceTestRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All tests of an athlete, newest first
    pub async fn list_by_athlete(&self, athlete_id: Uuid) -> Result<Vec<PerformanceTest>> {
        let tests = sqlx::query_as::<_, PerformanceTest>(&format!(
            "SELECT {} FROM performance_tests WHERE athlete_id = $1 ORDER BY created_at DESC",
            TEST_COLUMNS
        ))
        .bind(athlete_id)
        .fetch_all(self.pool)
        .await?;

        Ok(tests)
    }

    pub async fn find_by_id(&self, test_id: Uuid) -> Result<PerformanceTest> {
        let test = sqlx::query_as::<_, PerformanceTest>(&format!(
            "SELECT {} FROM performance_tests WHERE test_id = $1",
            TEST_COLUMNS
        ))
        .bind(test_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(test)
    }

    pub async fn create(&self, athlete_id: Uuid, req: &CreateTestRequest) -> Result<PerformanceTest> {
        let test = sqlx::query_as::<_, PerformanceTest>(&format!(
            r#"
            INSERT INTO performance_tests (athlete_id, test_type, result, ai_confidence)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            TEST_COLUMNS
        ))
        .bind(athlete_id)
        .bind(req.test_type)
        .bind(req.result)
        .bind(req.ai_confidence)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .with_constraint_message("Duplicate test", "Athlete does not exist")
        })?;

        Ok(test)
    }

    /// Mark a test as verified. A verified test can not be verified again.
    pub async fn mark_verified(&self, test_id: Uuid) -> Result<PerformanceTest> {
        let updated = sqlx::query_as::<_, PerformanceTest>(&format!(
            r#"
            UPDATE performance_tests
            SET verified = TRUE
            WHERE test_id = $1 AND verified = FALSE
            RETURNING {}
            "#,
            TEST_COLUMNS
        ))
        .bind(test_id)
        .fetch_optional(self.pool)
        .await?;

        match updated {
            Some(test) => Ok(test),
            None => {
                // Distinguish a missing test from one that was already verified
                self.find_by_id(test_id).await?;
                Err(StorageError::ConstraintViolation(
                    "Test is already verified".to_string(),
                ))
            }
        }
    }

    pub async fn count_by_athlete(&self, athlete_id: Uuid) -> Result<(i64, i64)> {
        let counts: (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*)::bigint, COUNT(DISTINCT test_type)::bigint
            FROM performance_tests
            WHERE athlete_id = $1
            "#,
        )
        .bind(athlete_id)
        .fetch_one(self.pool)
        .await?;

        Ok(counts)
    }

    /// Percentile (0-100) of the athlete among all athletes with tests,
    /// ranked per test type on each athlete's best result.
    pub async fn percentile_for_athlete(&self, athlete_id: Uuid) -> Result<f64> {
        let rows = sqlx::query_as::<_, (Uuid, TestType, Decimal, Decimal)>(
            r#"
            SELECT athlete_id, test_type, MIN(result), MAX(result)
            FROM performance_tests
            WHERE test_type IN (
                SELECT DISTINCT test_type FROM performance_tests WHERE athlete_id = $1
            )
            GROUP BY athlete_id, test_type
            "#,
        )
        .bind(athlete_id)
        .fetch_all(self.pool)
        .await?;

        let bests: Vec<BestResult> = rows
            .into_iter()
            .map(|(athlete_id, test_type, min, max)| BestResult {
                athlete_id,
                test_type,
                result: if test_type.lower_is_better() { min } else { max },
            })
            .collect();

        Ok(percentile::percentile(athlete_id, &bests))
    }
}
