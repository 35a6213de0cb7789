use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for registering the caller as a scout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateScoutRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    pub full_name: String,

    #[validate(length(max = 255))]
    pub organization: Option<String>,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    #[validate(length(equal = 2, message = "State must be a two letter code"))]
    pub state: Option<String>,
}
