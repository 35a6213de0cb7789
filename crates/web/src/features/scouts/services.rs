use sqlx::PgPool;
use storage::{
    dto::scout::CreateScoutRequest,
    error::Result,
    models::{AthleteView, Scout},
    repository::{athlete_view::AthleteViewRepository, scout::ScoutRepository},
    services::{achievements::spawn_achievement_check, store::PgAchievementStore},
};
use uuid::Uuid;

/// List all scouts
pub async fn list_scouts(pool: &PgPool) -> Result<Vec<Scout>> {
    let repo = ScoutRepository::new(pool);
    repo.list().await
}

/// Get scout by ID
pub async fn get_scout(pool: &PgPool, scout_id: Uuid) -> Result<Scout> {
    let repo = ScoutRepository::new(pool);
    repo.find_by_id(scout_id).await
}

/// Scout profile of a user account, if the account is a scout
pub async fn find_scout_for_user(pool: &PgPool, user_id: &str) -> Result<Option<Scout>> {
    let repo = ScoutRepository::new(pool);
    repo.find_by_user_id(user_id).await
}

/// Register the caller as a scout
pub async fn create_scout(pool: &PgPool, user_id: &str, request: &CreateScoutRequest) -> Result<Scout> {
    let repo = ScoutRepository::new(pool);
    let scout = repo.create(user_id, request).await?;

    tracing::info!(scout_id = %scout.scout_id, "Scout registered");

    Ok(scout)
}

/// Record that a scout opened an athlete's profile
pub async fn record_view(pool: &PgPool, athlete_id: Uuid, scout_id: Uuid) -> Result<AthleteView> {
    let repo = AthleteViewRepository::new(pool);
    let view = repo.record(athlete_id, scout_id).await?;

    spawn_achievement_check(PgAchievementStore::new(pool.clone()), athlete_id);

    Ok(view)
}
