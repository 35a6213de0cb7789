//! Trust tier lookup.
//!
//! Every tier maps to a fixed display record. Nothing here is computed from
//! athlete data; the tier itself is persisted on the athlete row and only
//! changed through the admin verification endpoint.

use crate::models::VerificationLevel;

/// Display record for one trust tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierInfo {
    pub level: VerificationLevel,
    pub label: &'static str,
    pub score_percent: u8,
    pub benefits: &'static [&'static str],
    /// Higher is shown first in scout listings.
    pub priority: u8,
}

static TIERS: [TierInfo; 4] = [
    TierInfo {
        level: VerificationLevel::Bronze,
        label: "Bronze",
        score_percent: 25,
        benefits: &["Perfil visível na busca de olheiros"],
        priority: 1,
    },
    TierInfo {
        level: VerificationLevel::Silver,
        label: "Prata",
        score_percent: 50,
        benefits: &[
            "Perfil visível na busca de olheiros",
            "Selo de testes verificados",
        ],
        priority: 2,
    },
    TierInfo {
        level: VerificationLevel::Gold,
        label: "Ouro",
        score_percent: 75,
        benefits: &[
            "Perfil visível na busca de olheiros",
            "Selo de testes verificados",
            "Destaque nas buscas",
            "Contato direto com olheiros",
        ],
        priority: 3,
    },
    TierInfo {
        level: VerificationLevel::Platinum,
        label: "Platina",
        score_percent: 100,
        benefits: &[
            "Perfil visível na busca de olheiros",
            "Selo de testes verificados",
            "Destaque nas buscas",
            "Contato direto com olheiros",
            "Convites para peneiras parceiras",
        ],
        priority: 4,
    },
];

pub fn tier_info(level: VerificationLevel) -> &'static TierInfo {
    // TIERS is indexed in declaration order of VerificationLevel.
    &TIERS[level as usize]
}

pub fn trust_score(level: VerificationLevel) -> u8 {
    tier_info(level).score_percent
}

/// All tiers from bronze to platinum.
pub fn all_tiers() -> &'static [TierInfo] {
    &TIERS
}

/// The tier directly above `level`, or `None` at platinum.
pub fn next_tier(level: VerificationLevel) -> Option<&'static TierInfo> {
    TIERS.get(level as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_level_order() {
        for level in VerificationLevel::ALL {
            assert_eq!(tier_info(level).level, level);
        }
    }

    #[test]
    fn test_scores_are_exact_and_strictly_increasing() {
        let scores: Vec<u8> = VerificationLevel::ALL
            .iter()
            .map(|level| trust_score(*level))
            .collect();
        assert_eq!(scores, vec![25, 50, 75, 100]);
        assert!(scores.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookup_is_stable_across_calls() {
        for level in VerificationLevel::ALL {
            assert_eq!(tier_info(level), tier_info(level));
            assert!(std::ptr::eq(tier_info(level), tier_info(level)));
        }
    }

    #[test]
    fn test_priority_follows_tier_order() {
        let priorities: Vec<u8> = all_tiers().iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_benefits_accumulate_with_tier() {
        assert!(
            all_tiers()
                .windows(2)
                .all(|w| w[0].benefits.len() < w[1].benefits.len())
        );
    }

    #[test]
    fn test_next_tier() {
        assert_eq!(
            next_tier(VerificationLevel::Silver).map(|t| t.level),
            Some(VerificationLevel::Gold)
        );
        assert!(next_tier(VerificationLevel::Platinum).is_none());
    }
}
