use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{list_notifications, mark_read};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/:notification_id/read", put(mark_read))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
