use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::VerificationLevel;
use crate::services::verification::TierInfo;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TierResponse {
    pub level: VerificationLevel,
    pub label: String,
    pub score_percent: u8,
    pub benefits: Vec<String>,
    pub priority: u8,
}

impl From<&TierInfo> for TierResponse {
    fn from(tier: &TierInfo) -> Self {
        Self {
            level: tier.level,
            label: tier.label.to_string(),
            score_percent: tier.score_percent,
            benefits: tier.benefits.iter().map(|b| b.to_string()).collect(),
            priority: tier.priority,
        }
    }
}

/// Verification state of one athlete, with the next tier to reach if any
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteVerificationResponse {
    pub athlete_id: Uuid,
    pub trust_score: u8,
    pub tier: TierResponse,
    pub next_tier: Option<TierResponse>,
}

/// Admin request moving an athlete to another trust tier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetVerificationLevelRequest {
    pub verification_level: VerificationLevel,
}
