use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::TestType;

/// Request payload for submitting a performance test result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTestRequest {
    pub test_type: TestType,

    #[validate(custom(function = "validate_result"))]
    pub result: Decimal,

    #[validate(custom(function = "validate_confidence"))]
    pub ai_confidence: Option<Decimal>,
}

fn validate_result(result: &Decimal) -> Result<(), validator::ValidationError> {
    if result.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_result"));
    }
    Ok(())
}

fn validate_confidence(confidence: &Decimal) -> Result<(), validator::ValidationError> {
    if *confidence < Decimal::ZERO || *confidence > Decimal::ONE {
        return Err(validator::ValidationError::new("confidence_out_of_range"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_confidence_within_unit_interval() {
        let request = CreateTestRequest {
            test_type: TestType::Speed20m,
            result: Decimal::new(312, 2),
            ai_confidence: Some(Decimal::new(87, 2)),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_result_and_high_confidence() {
        let request = CreateTestRequest {
            test_type: TestType::VerticalJump,
            result: Decimal::new(-1, 0),
            ai_confidence: Some(Decimal::new(15, 1)),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("result"));
        assert!(errors.field_errors().contains_key("ai_confidence"));
    }
}
