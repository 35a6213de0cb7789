use async_trait::async_trait;
use chrono::{Days, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::achievements::AchievementStore;
use super::streak::compute_streak;
use crate::error::Result;
use crate::models::{Achievement, AchievementType, Athlete, Notification, PerformanceTest};
use crate::repository::{
    achievement::AchievementRepository, athlete::AthleteRepository,
    athlete_view::AthleteViewRepository, check_in::CheckInRepository,
    notification::NotificationRepository, performance_test::PerformanceTestRepository,
};

/// Check-ins older than this can not contribute to a current streak worth reporting.
const STREAK_LOOKBACK_DAYS: u64 = 366;

/// [`AchievementStore`] backed by the Postgres repositories.
#[derive(Clone)]
pub struct PgAchievementStore {
    pool: PgPool,
}

impl PgAchievementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementStore for PgAchievementStore {
    async fn get_athlete(&self, athlete_id: Uuid) -> Result<Option<Athlete>> {
        AthleteRepository::new(&self.pool)
            .find_optional_by_id(athlete_id)
            .await
    }

    async fn get_tests_by_athlete(&self, athlete_id: Uuid) -> Result<Vec<PerformanceTest>> {
        PerformanceTestRepository::new(&self.pool)
            .list_by_athlete(athlete_id)
            .await
    }

    async fn get_athlete_view_count(&self, athlete_id: Uuid) -> Result<i64> {
        AthleteViewRepository::new(&self.pool)
            .count_for_athlete(athlete_id)
            .await
    }

    async fn get_athlete_achievements(&self, athlete_id: Uuid) -> Result<Vec<Achievement>> {
        AchievementRepository::new(&self.pool)
            .list_by_athlete(athlete_id)
            .await
    }

    async fn get_athlete_streak(&self, athlete_id: Uuid) -> Result<u32> {
        athlete_streak(&self.pool, athlete_id).await
    }

    async fn get_athlete_percentile(&self, athlete_id: Uuid) -> Result<f64> {
        PerformanceTestRepository::new(&self.pool)
            .percentile_for_athlete(athlete_id)
            .await
    }

    async fn create_achievement(
        &self,
        athlete_id: Uuid,
        achievement_type: AchievementType,
    ) -> Result<Option<Achievement>> {
        AchievementRepository::new(&self.pool)
            .create(athlete_id, achievement_type)
            .await
    }

    async fn create_notification(
        &self,
        user_id: &str,
        kind: &str,
        title: &str,
        message: &str,
    ) -> Result<Notification> {
        NotificationRepository::new(&self.pool)
            .create(user_id, kind, title, message)
            .await
    }
}

/// Current check-in streak of an athlete, in days.
pub async fn athlete_streak(pool: &PgPool, athlete_id: Uuid) -> Result<u32> {
    let today = Utc::now().date_naive();
    let since = today
        .checked_sub_days(Days::new(STREAK_LOOKBACK_DAYS))
        .unwrap_or(today);

    let days = CheckInRepository::new(pool)
        .days_since(athlete_id, since)
        .await?;

    Ok(compute_streak(&days, today))
}
