use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_scout, get_scout, list_scouts, record_view};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_scout))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_scouts))
        .route("/:scout_id", get(get_scout))
        .merge(protected)
}

/// Routes nested under `/athletes`
pub fn athlete_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:athlete_id/views", post(record_view))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
