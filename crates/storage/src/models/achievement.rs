use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Badge kinds an athlete can unlock. Each kind is unlocked at most once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "achievement_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AchievementType {
    FirstTest,
    CompleteProfile,
    WeekStreak,
    RisingStar,
    SpeedDemon,
    Champion,
    VerifiedAthlete,
    VerifiedGold,
}

/// Fixed presentation data copied into an achievement row on unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub points: i32,
}

impl AchievementType {
    pub const ALL: [AchievementType; 8] = [
        AchievementType::FirstTest,
        AchievementType::CompleteProfile,
        AchievementType::WeekStreak,
        AchievementType::RisingStar,
        AchievementType::SpeedDemon,
        AchievementType::Champion,
        AchievementType::VerifiedAthlete,
        AchievementType::VerifiedGold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTest => "first_test",
            Self::CompleteProfile => "complete_profile",
            Self::WeekStreak => "week_streak",
            Self::RisingStar => "rising_star",
            Self::SpeedDemon => "speed_demon",
            Self::Champion => "champion",
            Self::VerifiedAthlete => "verified_athlete",
            Self::VerifiedGold => "verified_gold",
        }
    }

    pub fn template(&self) -> AchievementTemplate {
        match self {
            Self::FirstTest => AchievementTemplate {
                title: "Primeiro Teste",
                description: "Completou seu primeiro teste de desempenho",
                icon: "target",
                points: 50,
            },
            Self::CompleteProfile => AchievementTemplate {
                title: "Perfil Completo",
                description: "Preencheu todas as informações do perfil",
                icon: "user-check",
                points: 100,
            },
            Self::WeekStreak => AchievementTemplate {
                title: "Sequência de 7 Dias",
                description: "Fez check-in por 7 dias seguidos",
                icon: "flame",
                points: 150,
            },
            Self::RisingStar => AchievementTemplate {
                title: "Estrela em Ascensão",
                description: "Seu perfil foi visto por olheiros 10 vezes",
                icon: "star",
                points: 200,
            },
            Self::SpeedDemon => AchievementTemplate {
                title: "Raio",
                description: "Ficou entre os 10% melhores atletas",
                icon: "zap",
                points: 250,
            },
            Self::Champion => AchievementTemplate {
                title: "Campeão",
                description: "Ficou entre os 5% melhores atletas",
                icon: "trophy",
                points: 500,
            },
            Self::VerifiedAthlete => AchievementTemplate {
                title: "Atleta Completo",
                description: "Realizou 6 tipos diferentes de teste",
                icon: "award",
                points: 300,
            },
            Self::VerifiedGold => AchievementTemplate {
                title: "Verificação Ouro",
                description: "Alcançou o nível de verificação ouro",
                icon: "medal",
                points: 400,
            },
        }
    }
}

/// Unlock record for one achievement of one athlete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Achievement {
    pub achievement_id: Uuid,
    pub athlete_id: Uuid,
    pub achievement_type: AchievementType,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub points: i32,
    pub unlocked_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_as_str_matches_serde_tag() {
        for kind in AchievementType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_templates_have_unique_titles_and_positive_points() {
        let titles: HashSet<_> = AchievementType::ALL
            .iter()
            .map(|kind| kind.template().title)
            .collect();
        assert_eq!(titles.len(), AchievementType::ALL.len());
        assert!(AchievementType::ALL.iter().all(|k| k.template().points > 0));
    }
}
