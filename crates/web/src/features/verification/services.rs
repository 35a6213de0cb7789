use storage::{
    dto::verification::{AthleteVerificationResponse, TierResponse},
    models::Athlete,
    services::verification,
};

/// All trust tiers from bronze to platinum
pub fn list_tiers() -> Vec<TierResponse> {
    verification::all_tiers()
        .iter()
        .map(TierResponse::from)
        .collect()
}

/// Verification summary of an athlete
pub fn athlete_verification(athlete: &Athlete) -> AthleteVerificationResponse {
    let level = athlete.verification_level;

    AthleteVerificationResponse {
        athlete_id: athlete.athlete_id,
        trust_score: verification::trust_score(level),
        tier: TierResponse::from(verification::tier_info(level)),
        next_tier: verification::next_tier(level).map(TierResponse::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::models::VerificationLevel;

    #[test]
    fn test_tiers_listed_in_ascending_order() {
        let tiers = list_tiers();
        let levels: Vec<_> = tiers.iter().map(|t| t.level).collect();
        assert_eq!(levels, VerificationLevel::ALL.to_vec());
        assert_eq!(tiers[3].label, "Platina");
        assert_eq!(tiers[3].score_percent, 100);
    }
}
