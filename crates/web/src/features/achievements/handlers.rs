use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::achievement::{AchievementCheckResponse, AchievementListResponse},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::features::athletes;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes/{athlete_id}/achievements",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Unlocked achievements and total points", body = AchievementListResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "achievements"
)]
pub async fn list_achievements(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Response, WebError> {
    athletes::services::get_athlete(db.pool(), athlete_id).await?;

    let response = services::list_achievements(db.pool(), athlete_id).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes/{athlete_id}/achievements/check",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Achievements unlocked by this check", body = AchievementCheckResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "achievements"
)]
pub async fn check_achievements(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Response, WebError> {
    athletes::services::get_athlete(db.pool(), athlete_id).await?;

    let unlocked = services::check_achievements(db.pool(), athlete_id).await;

    Ok(Json(AchievementCheckResponse { unlocked }).into_response())
}
