use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    check_in, create_athlete, delete_athlete, get_athlete, get_athlete_stats, list_athletes,
    set_verification_level, update_athlete,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_athlete))
        .route("/:athlete_id", put(update_athlete).delete(delete_athlete))
        .route("/:athlete_id/verification", put(set_verification_level))
        .route("/:athlete_id/check-ins", post(check_in))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_athletes))
        .route("/:athlete_id", get(get_athlete))
        .route("/:athlete_id/stats", get(get_athlete_stats))
        .merge(protected)
}
