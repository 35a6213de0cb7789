//! Achievement unlocking.
//!
//! Rules are evaluated against a snapshot of the athlete's aggregates. Every
//! satisfied rule whose type is not unlocked yet produces one achievement row
//! and one notification. The `(athlete_id, achievement_type)` unique
//! constraint backs the snapshot check, so two concurrent evaluations can not
//! both insert the same badge.

use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::notification::KIND_ACHIEVEMENT_UNLOCKED;
use crate::models::{
    Achievement, AchievementType, Athlete, Notification, PerformanceTest, VerificationLevel,
};

pub const WEEK_STREAK_DAYS: u32 = 7;
pub const RISING_STAR_VIEWS: i64 = 10;
pub const SPEED_DEMON_PERCENTILE: f64 = 90.0;
pub const CHAMPION_PERCENTILE: f64 = 95.0;
pub const VERIFIED_ATHLETE_TEST_TYPES: usize = 6;

/// Data access needed by the evaluator.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    async fn get_athlete(&self, athlete_id: Uuid) -> Result<Option<Athlete>>;

    async fn get_tests_by_athlete(&self, athlete_id: Uuid) -> Result<Vec<PerformanceTest>>;

    async fn get_athlete_view_count(&self, athlete_id: Uuid) -> Result<i64>;

    async fn get_athlete_achievements(&self, athlete_id: Uuid) -> Result<Vec<Achievement>>;

    async fn get_athlete_streak(&self, athlete_id: Uuid) -> Result<u32>;

    /// Percent rank (0-100) of the athlete among athletes with tests.
    async fn get_athlete_percentile(&self, athlete_id: Uuid) -> Result<f64>;

    /// Inserts the templated achievement. Returns `None` if the athlete
    /// already holds this type.
    async fn create_achievement(
        &self,
        athlete_id: Uuid,
        achievement_type: AchievementType,
    ) -> Result<Option<Achievement>>;

    async fn create_notification(
        &self,
        user_id: &str,
        kind: &str,
        title: &str,
        message: &str,
    ) -> Result<Notification>;
}

/// Aggregates the rules are evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteStats {
    pub test_count: usize,
    pub distinct_test_types: usize,
    pub profile_complete: bool,
    pub streak: u32,
    pub view_count: i64,
    pub percentile: f64,
    pub verification_level: VerificationLevel,
}

impl AthleteStats {
    pub fn collect(
        athlete: &Athlete,
        tests: &[PerformanceTest],
        view_count: i64,
        streak: u32,
        percentile: f64,
    ) -> Self {
        let distinct_test_types = tests
            .iter()
            .map(|t| t.test_type)
            .collect::<HashSet<_>>()
            .len();

        Self {
            test_count: tests.len(),
            distinct_test_types,
            profile_complete: athlete.has_complete_profile(),
            streak,
            view_count,
            percentile,
            verification_level: athlete.verification_level,
        }
    }
}

struct Rule {
    achievement_type: AchievementType,
    unlocked_when: fn(&AthleteStats) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        achievement_type: AchievementType::FirstTest,
        unlocked_when: |s| s.test_count >= 1,
    },
    Rule {
        achievement_type: AchievementType::CompleteProfile,
        unlocked_when: |s| s.profile_complete,
    },
    Rule {
        achievement_type: AchievementType::WeekStreak,
        unlocked_when: |s| s.streak >= WEEK_STREAK_DAYS,
    },
    Rule {
        achievement_type: AchievementType::RisingStar,
        unlocked_when: |s| s.view_count >= RISING_STAR_VIEWS,
    },
    Rule {
        achievement_type: AchievementType::SpeedDemon,
        unlocked_when: |s| s.percentile >= SPEED_DEMON_PERCENTILE,
    },
    Rule {
        achievement_type: AchievementType::Champion,
        unlocked_when: |s| s.percentile >= CHAMPION_PERCENTILE,
    },
    Rule {
        achievement_type: AchievementType::VerifiedAthlete,
        unlocked_when: |s| s.distinct_test_types >= VERIFIED_ATHLETE_TEST_TYPES,
    },
    Rule {
        achievement_type: AchievementType::VerifiedGold,
        unlocked_when: |s| s.verification_level == VerificationLevel::Gold,
    },
];

/// Achievement types whose rule holds for `stats`, regardless of what is
/// already unlocked.
pub fn qualifying_achievements(stats: &AthleteStats) -> Vec<AchievementType> {
    RULES
        .iter()
        .filter(|rule| (rule.unlocked_when)(stats))
        .map(|rule| rule.achievement_type)
        .collect()
}

/// Loads the athlete's aggregates and unlocks every newly qualifying
/// achievement. Stops at the first storage error.
pub async fn evaluate_achievements<S>(store: &S, athlete_id: Uuid) -> Result<Vec<Achievement>>
where
    S: AchievementStore + ?Sized,
{
    let Some(athlete) = store.get_athlete(athlete_id).await? else {
        tracing::warn!(%athlete_id, "Skipping achievement check for unknown athlete");
        return Ok(Vec::new());
    };

    let tests = store.get_tests_by_athlete(athlete_id).await?;
    let view_count = store.get_athlete_view_count(athlete_id).await?;
    let unlocked: HashSet<AchievementType> = store
        .get_athlete_achievements(athlete_id)
        .await?
        .into_iter()
        .map(|a| a.achievement_type)
        .collect();
    let streak = store.get_athlete_streak(athlete_id).await?;
    let percentile = store.get_athlete_percentile(athlete_id).await?;

    let stats = AthleteStats::collect(&athlete, &tests, view_count, streak, percentile);
    tracing::debug!(%athlete_id, ?stats, "Evaluating achievements");

    let mut created = Vec::new();
    for achievement_type in qualifying_achievements(&stats) {
        if unlocked.contains(&achievement_type) {
            continue;
        }

        let Some(achievement) = store.create_achievement(athlete_id, achievement_type).await? else {
            tracing::debug!(
                %athlete_id,
                achievement = achievement_type.as_str(),
                "Achievement already unlocked by a concurrent check"
            );
            continue;
        };

        tracing::info!(
            %athlete_id,
            achievement = achievement_type.as_str(),
            points = achievement.points,
            "Achievement unlocked"
        );

        store
            .create_notification(
                &athlete.user_id,
                KIND_ACHIEVEMENT_UNLOCKED,
                "Nova conquista desbloqueada!",
                &format!("{}: {}", achievement.title, achievement.description),
            )
            .await?;

        created.push(achievement);
    }

    Ok(created)
}

/// Best-effort entry point: failures are logged and reported as no unlocks.
pub async fn check_and_unlock_achievements<S>(store: &S, athlete_id: Uuid) -> Vec<Achievement>
where
    S: AchievementStore + ?Sized,
{
    match evaluate_achievements(store, athlete_id).await {
        Ok(created) => created,
        Err(e) => {
            tracing::error!(%athlete_id, error = %e, "Achievement check failed");
            Vec::new()
        }
    }
}

/// Runs the achievement check in the background after a primary action.
pub fn spawn_achievement_check<S>(store: S, athlete_id: Uuid) -> tokio::task::JoinHandle<()>
where
    S: AchievementStore + 'static,
{
    tokio::spawn(async move {
        check_and_unlock_achievements(&store, athlete_id).await;
    })
}
