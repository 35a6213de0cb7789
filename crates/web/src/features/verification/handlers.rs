use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::verification::{AthleteVerificationResponse, TierResponse},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::features::athletes;

use super::services;

#[utoipa::path(
    get,
    path = "/api/verification/tiers",
    responses(
        (status = 200, description = "Trust tiers in ascending order", body = Vec<TierResponse>)
    ),
    tag = "verification"
)]
pub async fn list_tiers() -> Result<Response, WebError> {
    Ok(Json(services::list_tiers()).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{athlete_id}/verification",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Trust tier and score of the athlete", body = AthleteVerificationResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "verification"
)]
pub async fn get_athlete_verification(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let athlete = athletes::services::get_athlete(db.pool(), athlete_id).await?;

    Ok(Json(services::athlete_verification(&athlete)).into_response())
}
