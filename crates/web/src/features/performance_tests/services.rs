use sqlx::PgPool;
use storage::{
    dto::performance_test::CreateTestRequest,
    error::Result,
    models::PerformanceTest,
    repository::performance_test::PerformanceTestRepository,
    services::{achievements::spawn_achievement_check, store::PgAchievementStore},
};
use uuid::Uuid;

/// List the tests of an athlete
pub async fn list_tests(pool: &PgPool, athlete_id: Uuid) -> Result<Vec<PerformanceTest>> {
    let repo = PerformanceTestRepository::new(pool);
    repo.list_by_athlete(athlete_id).await
}

/// Store a submitted test and re-evaluate achievements in the background
pub async fn submit_test(
    pool: &PgPool,
    athlete_id: Uuid,
    request: &CreateTestRequest,
) -> Result<PerformanceTest> {
    let repo = PerformanceTestRepository::new(pool);
    let test = repo.create(athlete_id, request).await?;

    tracing::info!(
        %athlete_id,
        test_id = %test.test_id,
        test_type = ?test.test_type,
        "Performance test submitted"
    );
    spawn_achievement_check(PgAchievementStore::new(pool.clone()), athlete_id);

    Ok(test)
}

/// Mark a test as verified
pub async fn verify_test(pool: &PgPool, test_id: Uuid) -> Result<PerformanceTest> {
    let repo = PerformanceTestRepository::new(pool);
    let test = repo.mark_verified(test_id).await?;

    tracing::info!(%test_id, athlete_id = %test.athlete_id, "Performance test verified");

    Ok(test)
}
