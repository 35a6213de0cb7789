use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::performance_test::CreateTestRequest, models::PerformanceTest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::{athletes, ensure_owner};
use crate::middleware::session::SessionContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes/{athlete_id}/tests",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Tests of the athlete, newest first", body = Vec<PerformanceTest>),
        (status = 404, description = "Athlete not found")
    ),
    tag = "tests"
)]
pub async fn list_tests(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Response, WebError> {
    athletes::services::get_athlete(db.pool(), athlete_id).await?;

    let tests = services::list_tests(db.pool(), athlete_id).await?;

    Ok(Json(tests).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes/{athlete_id}/tests",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    request_body = CreateTestRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Test submitted", body = PerformanceTest),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Profile belongs to another account"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "tests"
)]
pub async fn submit_test(
    State(db): State<Database>,
    Path(athlete_id): Path<Uuid>,
    session: SessionContext,
    Json(req): Json<CreateTestRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = athletes::services::get_athlete(db.pool(), athlete_id).await?;
    ensure_owner(&athlete, &session)?;

    let test = services::submit_test(db.pool(), athlete_id, &req).await?;

    Ok((StatusCode::CREATED, Json(test)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tests/{test_id}/verify",
    params(
        ("test_id" = Uuid, Path, description = "Test ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Test verified", body = PerformanceTest),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Test not found"),
        (status = 409, description = "Test already verified")
    ),
    tag = "tests"
)]
pub async fn verify_test(
    State(db): State<Database>,
    Path(test_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let test = services::verify_test(db.pool(), test_id).await?;

    Ok(Json(test).into_response())
}
