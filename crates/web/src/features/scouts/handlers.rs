use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::scout::CreateScoutRequest,
    models::{AthleteView, Scout},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::athletes;
use crate::middleware::session::SessionContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scouts",
    responses(
        (status = 200, description = "List all scouts successfully", body = Vec<Scout>)
    ),
    tag = "scouts"
)]
pub async fn list_scouts(State(db): State<Database>) -> Result<Response, WebError> {
    let scouts = services::list_scouts(db.pool()).await?;

    Ok(Json(scouts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scouts/{scout_id}",
    params(
        ("scout_id" = Uuid, Path, description = "Scout ID")
    ),
    responses(
        (status = 200, description = "Scout found", body = Scout),
        (status = 404, description = "Scout not found")
    ),
    tag = "scouts"
)]
pub async fn get_scout(
    State(db): State<Database>,
    Path(scout_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let scout = services::get_scout(db.pool(), scout_id).await?;

    Ok(Json(scout).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scouts",
    request_body = CreateScoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Scout registered successfully", body = Scout),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Account is already a scout")
    ),
    tag = "scouts"
)]
pub async fn create_scout(
    State(db): State<Database>,
    session: SessionContext,
    Json(req): Json<CreateScoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let scout = services::create_scout(db.pool(), &session.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(scout)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes/{athlete_id}/views",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Profile view recorded", body = AthleteView),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not a scout"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "scouts"
)]
pub async fn record_view(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
    session: SessionContext,
) -> Result<Response, WebError> {
    let scout = services::find_scout_for_user(db.pool(), &session.user_id)
        .await?
        .ok_or_else(|| WebError::Forbidden("Only scouts can record profile views".to_string()))?;

    athletes::services::get_athlete(db.pool(), athlete_id).await?;

    let view = services::record_view(db.pool(), athlete_id, scout.scout_id).await?;

    Ok((StatusCode::CREATED, Json(view)).into_response())
}
