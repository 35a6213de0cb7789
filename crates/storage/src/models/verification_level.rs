use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Trust tier of an athlete, ordered from least to most verified.
///
/// Persisted as the `verification_level` Postgres enum; a value outside the
/// four variants fails to decode rather than being silently mapped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
)]
#[sqlx(type_name = "verification_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl VerificationLevel {
    pub const ALL: [VerificationLevel; 4] = [
        VerificationLevel::Bronze,
        VerificationLevel::Silver,
        VerificationLevel::Gold,
        VerificationLevel::Platinum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_strictly_ordered() {
        assert!(VerificationLevel::Bronze < VerificationLevel::Silver);
        assert!(VerificationLevel::Silver < VerificationLevel::Gold);
        assert!(VerificationLevel::Gold < VerificationLevel::Platinum);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&VerificationLevel::Platinum).unwrap();
        assert_eq!(json, "\"platinum\"");

        let parsed: VerificationLevel = serde_json::from_str("\"gold\"").unwrap();
        assert_eq!(parsed, VerificationLevel::Gold);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(serde_json::from_str::<VerificationLevel>("\"diamond\"").is_err());
    }
}
