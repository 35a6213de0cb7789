use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        athlete::{
            AthleteListFilter, AthleteResponse, AthleteStatsResponse, CheckInResponse,
            CreateAthleteRequest, UpdateAthleteRequest,
        },
        common::PaginatedResponse,
        verification::SetVerificationLevelRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::ensure_owner;
use crate::middleware::session::SessionContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    params(AthleteListFilter),
    responses(
        (status = 200, description = "Athletes ordered by verification tier", body = PaginatedResponse<AthleteResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(filter): Query<AthleteListFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let (athletes, total_items) = services::list_athletes(db.pool(), &filter).await?;

    let data: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();
    let response = PaginatedResponse::new(data, filter.pagination(), total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{athlete_id}",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), athlete_id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{athlete_id}/stats",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Dashboard counters of the athlete", body = AthleteStatsResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete_stats(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let stats = services::get_athlete_stats(db.pool(), athlete_id).await?;

    Ok(Json(stats).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Account already has an athlete profile")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    session: SessionContext,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &session.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{athlete_id}",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    request_body = UpdateAthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Profile belongs to another account"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
    session: SessionContext,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let existing = services::get_athlete(db.pool(), athlete_id).await?;
    ensure_owner(&existing, &session)?;

    let updated = services::update_athlete(db.pool(), &existing, &update_req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{athlete_id}/verification",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    request_body = SetVerificationLevelRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Verification level updated", body = AthleteResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "verification"
)]
pub async fn set_verification_level(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
    Json(req): Json<SetVerificationLevelRequest>,
) -> Result<Response, WebError> {
    let updated =
        services::set_verification_level(db.pool(), athlete_id, req.verification_level).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{athlete_id}",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), athlete_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes/{athlete_id}/check-ins",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Check-in recorded for today", body = CheckInResponse),
        (status = 200, description = "Athlete already checked in today", body = CheckInResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Profile belongs to another account"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn check_in(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
    session: SessionContext,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), athlete_id).await?;
    ensure_owner(&athlete, &session)?;

    let created = services::check_in(db.pool(), athlete_id).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(CheckInResponse { athlete_id, created })).into_response())
}
