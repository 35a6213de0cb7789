use sqlx::PgPool;
use storage::{
    dto::athlete::{AthleteListFilter, AthleteStatsResponse, CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    models::{Athlete, VerificationLevel},
    repository::{
        achievement::AchievementRepository, athlete::AthleteRepository,
        athlete_view::AthleteViewRepository, check_in::CheckInRepository,
        performance_test::PerformanceTestRepository,
    },
    services::{
        achievements::spawn_achievement_check,
        store::{PgAchievementStore, athlete_streak},
    },
};
use uuid::Uuid;

/// List athletes with filtering and pagination
pub async fn list_athletes(pool: &PgPool, filter: &AthleteListFilter) -> Result<(Vec<Athlete>, i64)> {
    let repo = AthleteRepository::new(pool);
    repo.list(filter).await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &PgPool, athlete_id: Uuid) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(athlete_id).await
}

/// Create the caller's athlete profile
pub async fn create_athlete(
    pool: &PgPool,
    user_id: &str,
    request: &CreateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.create(user_id, request).await?;

    tracing::info!(athlete_id = %athlete.athlete_id, "Athlete profile created");
    spawn_achievement_check(PgAchievementStore::new(pool.clone()), athlete.athlete_id);

    Ok(athlete)
}

/// Apply a profile update to an existing athlete
pub async fn update_athlete(
    pool: &PgPool,
    existing: &Athlete,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let updated = repo.update(&request.apply_to(existing)).await?;

    if updated.profile_complete && !existing.profile_complete {
        tracing::info!(athlete_id = %updated.athlete_id, "Athlete profile completed");
    }
    spawn_achievement_check(PgAchievementStore::new(pool.clone()), updated.athlete_id);

    Ok(updated)
}

/// Move an athlete to another trust tier
pub async fn set_verification_level(
    pool: &PgPool,
    athlete_id: Uuid,
    level: VerificationLevel,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let previous = repo.find_by_id(athlete_id).await?.verification_level;
    let updated = repo.set_verification_level(athlete_id, level).await?;

    tracing::info!(
        %athlete_id,
        from = previous.as_str(),
        to = level.as_str(),
        "Verification level changed"
    );
    spawn_achievement_check(PgAchievementStore::new(pool.clone()), athlete_id);

    Ok(updated)
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, athlete_id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(athlete_id).await
}

/// Collect the dashboard counters of an athlete
pub async fn get_athlete_stats(pool: &PgPool, athlete_id: Uuid) -> Result<AthleteStatsResponse> {
    let athlete = AthleteRepository::new(pool).find_by_id(athlete_id).await?;

    let tests = PerformanceTestRepository::new(pool);
    let (total_tests, distinct_test_types) = tests.count_by_athlete(athlete.athlete_id).await?;
    let percentile = tests.percentile_for_athlete(athlete.athlete_id).await?;
    let scout_views = AthleteViewRepository::new(pool)
        .count_for_athlete(athlete.athlete_id)
        .await?;
    let streak_days = athlete_streak(pool, athlete.athlete_id).await?;
    let achievement_points = AchievementRepository::new(pool)
        .total_points(athlete.athlete_id)
        .await?;

    Ok(AthleteStatsResponse {
        athlete_id: athlete.athlete_id,
        total_tests,
        distinct_test_types,
        scout_views,
        streak_days,
        percentile,
        achievement_points,
    })
}

/// Record today's check-in. Returns `false` if the athlete already checked in today.
pub async fn check_in(pool: &PgPool, athlete_id: Uuid) -> Result<bool> {
    let today = chrono::Utc::now().date_naive();
    let created = CheckInRepository::new(pool).record(athlete_id, today).await?;

    if created {
        tracing::debug!(%athlete_id, %today, "Check-in recorded");
        spawn_achievement_check(PgAchievementStore::new(pool.clone()), athlete_id);
    }

    Ok(created)
}
