use sqlx::PgPool;
use storage::{
    dto::achievement::AchievementListResponse,
    error::Result,
    models::Achievement,
    repository::achievement::AchievementRepository,
    services::{achievements::check_and_unlock_achievements, store::PgAchievementStore},
};
use uuid::Uuid;

/// List the unlocked achievements of an athlete
pub async fn list_achievements(pool: &PgPool, athlete_id: Uuid) -> Result<AchievementListResponse> {
    let repo = AchievementRepository::new(pool);
    let achievements = repo.list_by_athlete(athlete_id).await?;

    Ok(AchievementListResponse::new(athlete_id, achievements))
}

/// Run the achievement check inline and return what it unlocked
pub async fn check_achievements(pool: &PgPool, athlete_id: Uuid) -> Vec<Achievement> {
    let store = PgAchievementStore::new(pool.clone());
    check_and_unlock_achievements(&store, athlete_id).await
}
