use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::VerificationLevel;

/// Scores (0-100) for the fixed set of skills evaluated on an athlete card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct SkillsAssessment {
    #[validate(range(max = 100))]
    pub speed: Option<u8>,
    #[validate(range(max = 100))]
    pub agility: Option<u8>,
    #[validate(range(max = 100))]
    pub strength: Option<u8>,
    #[validate(range(max = 100))]
    pub technique: Option<u8>,
    #[validate(range(max = 100))]
    pub vision: Option<u8>,
    #[validate(range(max = 100))]
    pub finishing: Option<u8>,
    #[validate(range(max = 100))]
    pub passing: Option<u8>,
    #[validate(range(max = 100))]
    pub stamina: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub user_id: String,
    pub full_name: String,
    pub birth_date: Option<chrono::NaiveDate>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub position: Option<String>,
    pub dominant_foot: Option<String>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<Decimal>,
    pub current_team: Option<String>,
    pub verification_level: VerificationLevel,
    #[sqlx(json)]
    pub skills_assessment: SkillsAssessment,
    pub profile_complete: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl Athlete {
    /// Names of the profile fields that still need a value.
    ///
    /// A profile is complete when all nine of full name, birth date, city,
    /// state, position, dominant foot, height, weight and current team are set
    /// and non-blank.
    pub fn missing_profile_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("full_name", !self.full_name.trim().is_empty()),
            ("birth_date", self.birth_date.is_some()),
            ("city", filled(&self.city)),
            ("state", filled(&self.state)),
            ("position", filled(&self.position)),
            ("dominant_foot", filled(&self.dominant_foot)),
            ("height_cm", self.height_cm.is_some()),
            ("weight_kg", self.weight_kg.is_some()),
            ("current_team", filled(&self.current_team)),
        ];

        checks
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn has_complete_profile(&self) -> bool {
        self.missing_profile_fields().is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Athlete with every profile field populated.
    pub fn complete_athlete() -> Athlete {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        Athlete {
            athlete_id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            full_name: "Gabriel Souza".to_string(),
            birth_date: chrono::NaiveDate::from_ymd_opt(2009, 5, 14),
            city: Some("Recife".to_string()),
            state: Some("PE".to_string()),
            position: Some("Meia".to_string()),
            dominant_foot: Some("Direito".to_string()),
            height_cm: Some(172),
            weight_kg: Some(Decimal::new(640, 1)),
            current_team: Some("Sport Recife Sub-17".to_string()),
            verification_level: VerificationLevel::Bronze,
            skills_assessment: SkillsAssessment::default(),
            profile_complete: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Athlete with only the mandatory name set.
    pub fn bare_athlete() -> Athlete {
        Athlete {
            birth_date: None,
            city: None,
            state: None,
            position: None,
            dominant_foot: None,
            height_cm: None,
            weight_kg: None,
            current_team: None,
            profile_complete: false,
            ..complete_athlete()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_complete_profile_has_no_missing_fields() {
        assert!(complete_athlete().has_complete_profile());
    }

    #[test]
    fn test_bare_profile_lists_eight_missing_fields() {
        let missing = bare_athlete().missing_profile_fields();
        assert_eq!(missing.len(), 8);
        assert!(!missing.contains(&"full_name"));
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let mut athlete = complete_athlete();
        athlete.current_team = Some("   ".to_string());
        assert_eq!(athlete.missing_profile_fields(), vec!["current_team"]);
    }

    #[test]
    fn test_skills_assessment_defaults_missing_keys() {
        let skills: super::SkillsAssessment =
            serde_json::from_str(r#"{"speed": 80, "vision": 65}"#).unwrap();
        assert_eq!(skills.speed, Some(80));
        assert_eq!(skills.vision, Some(65));
        assert_eq!(skills.stamina, None);
    }
}
