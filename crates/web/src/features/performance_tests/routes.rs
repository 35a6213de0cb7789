use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{list_tests, submit_test, verify_test};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Routes nested under `/athletes`
pub fn athlete_routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:athlete_id/tests", post(submit_test))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:athlete_id/tests", get(list_tests))
        .merge(protected)
}

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:test_id/verify", put(verify_test))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
