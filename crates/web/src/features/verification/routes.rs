use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_athlete_verification, list_tiers};

pub fn routes() -> Router<Database> {
    Router::new().route("/tiers", get(list_tiers))
}

/// Routes nested under `/athletes`
pub fn athlete_routes() -> Router<Database> {
    Router::new().route("/:athlete_id/verification", get(get_athlete_verification))
}
