use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::PaginationParams;
use crate::models::{Athlete, SkillsAssessment, VerificationLevel};
use crate::services::verification;

/// Athlete card as returned by the API, including the derived trust score
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub position: Option<String>,
    pub dominant_foot: Option<String>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<Decimal>,
    pub current_team: Option<String>,
    pub verification_level: VerificationLevel,
    pub trust_score: u8,
    pub skills_assessment: SkillsAssessment,
    pub profile_complete: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            full_name: athlete.full_name,
            birth_date: athlete.birth_date,
            city: athlete.city,
            state: athlete.state,
            position: athlete.position,
            dominant_foot: athlete.dominant_foot,
            height_cm: athlete.height_cm,
            weight_kg: athlete.weight_kg,
            current_team: athlete.current_team,
            verification_level: athlete.verification_level,
            trust_score: verification::trust_score(athlete.verification_level),
            skills_assessment: athlete.skills_assessment,
            profile_complete: athlete.profile_complete,
            created_at: athlete.created_at,
            updated_at: athlete.updated_at,
        }
    }
}

/// Aggregate counters shown on the athlete dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteStatsResponse {
    pub athlete_id: Uuid,
    pub total_tests: i64,
    pub distinct_test_types: i64,
    pub scout_views: i64,
    pub streak_days: u32,
    pub percentile: f64,
    pub achievement_points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub athlete_id: Uuid,
    /// `false` when the athlete had already checked in today
    pub created: bool,
}

/// Query parameters for listing athletes
#[derive(Debug, Deserialize, IntoParams)]
pub struct AthleteListFilter {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    pub state: Option<String>,
    pub position: Option<String>,
    pub min_level: Option<VerificationLevel>,
}

fn default_page() -> u32 {
    PaginationParams::default().page
}

fn default_page_size() -> u32 {
    PaginationParams::default().page_size
}

impl AthleteListFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()?;

        if let Some(ref state) = self.state
            && !BRAZILIAN_STATES.contains(&state.as_str())
        {
            return Err(format!("unknown state '{}'", state));
        }

        Ok(())
    }
}

/// Request payload for creating the caller's athlete profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    pub full_name: String,

    pub birth_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    #[validate(custom(function = "validate_state"))]
    pub state: Option<String>,

    #[validate(length(max = 64))]
    pub position: Option<String>,

    #[validate(custom(function = "validate_dominant_foot"))]
    pub dominant_foot: Option<String>,

    #[validate(range(min = 100, max = 230, message = "Height must be between 100 and 230 cm"))]
    pub height_cm: Option<i32>,

    pub weight_kg: Option<Decimal>,

    #[validate(length(max = 255))]
    pub current_team: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub skills_assessment: SkillsAssessment,
}

/// Request payload for updating an athlete profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    #[validate(custom(function = "validate_state"))]
    pub state: Option<String>,

    #[validate(length(max = 64))]
    pub position: Option<String>,

    #[validate(custom(function = "validate_dominant_foot"))]
    pub dominant_foot: Option<String>,

    #[validate(range(min = 100, max = 230))]
    pub height_cm: Option<i32>,

    pub weight_kg: Option<Decimal>,

    #[validate(length(max = 255))]
    pub current_team: Option<String>,

    #[validate(nested)]
    pub skills_assessment: Option<SkillsAssessment>,
}

impl UpdateAthleteRequest {
    /// Applies the provided fields on top of `existing`.
    pub fn apply_to(&self, existing: &Athlete) -> Athlete {
        let mut athlete = existing.clone();

        if let Some(ref full_name) = self.full_name {
            athlete.full_name = full_name.clone();
        }
        athlete.birth_date = self.birth_date.or(existing.birth_date);
        athlete.city = self.city.clone().or_else(|| existing.city.clone());
        athlete.state = self.state.clone().or_else(|| existing.state.clone());
        athlete.position = self.position.clone().or_else(|| existing.position.clone());
        athlete.dominant_foot = self
            .dominant_foot
            .clone()
            .or_else(|| existing.dominant_foot.clone());
        athlete.height_cm = self.height_cm.or(existing.height_cm);
        athlete.weight_kg = self.weight_kg.or(existing.weight_kg);
        athlete.current_team = self
            .current_team
            .clone()
            .or_else(|| existing.current_team.clone());
        if let Some(ref skills) = self.skills_assessment {
            athlete.skills_assessment = skills.clone();
        }
        athlete.profile_complete = athlete.has_complete_profile();

        athlete
    }
}

pub const BRAZILIAN_STATES: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

fn validate_state(state: &str) -> Result<(), validator::ValidationError> {
    if BRAZILIAN_STATES.contains(&state) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_state"))
    }
}

fn validate_dominant_foot(foot: &str) -> Result<(), validator::ValidationError> {
    const VALID_FEET: &[&str] = &["Direito", "Esquerdo", "Ambidestro"];

    if VALID_FEET.contains(&foot) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_dominant_foot"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::athlete::fixtures::{bare_athlete, complete_athlete};

    #[test]
    fn test_update_fills_profile_and_marks_complete() {
        let existing = bare_athlete();
        let complete = complete_athlete();
        let request = UpdateAthleteRequest {
            birth_date: complete.birth_date,
            city: complete.city.clone(),
            state: complete.state.clone(),
            position: complete.position.clone(),
            dominant_foot: complete.dominant_foot.clone(),
            height_cm: complete.height_cm,
            weight_kg: complete.weight_kg,
            current_team: complete.current_team.clone(),
            ..Default::default()
        };

        let updated = request.apply_to(&existing);
        assert!(updated.profile_complete);
        assert_eq!(updated.full_name, existing.full_name);
    }

    #[test]
    fn test_empty_update_keeps_existing_values() {
        let existing = complete_athlete();
        let updated = UpdateAthleteRequest::default().apply_to(&existing);
        assert_eq!(updated.city, existing.city);
        assert_eq!(updated.verification_level, existing.verification_level);
    }

    #[test]
    fn test_rejects_unknown_state() {
        let request = UpdateAthleteRequest {
            state: Some("XX".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_skill() {
        let request = UpdateAthleteRequest {
            skills_assessment: Some(SkillsAssessment {
                speed: Some(140),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_list_filter_validates_state_and_paging() {
        let filter = AthleteListFilter {
            page: 1,
            page_size: 20,
            state: Some("SP".to_string()),
            position: None,
            min_level: Some(VerificationLevel::Silver),
        };
        assert!(filter.validate().is_ok());

        let filter = AthleteListFilter {
            page: 0,
            ..filter
        };
        assert!(filter.validate().is_err());
    }
}
