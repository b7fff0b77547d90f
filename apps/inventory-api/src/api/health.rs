//! Readiness endpoint

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::readiness_response;

use crate::state::AppState;

/// Create the /ready router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - runs `SELECT 1` against the pool
async fn readiness_check(State(state): State<AppState>) -> Response {
    let database = database::sql::check_health(&state.db)
        .await
        .map_err(|e| e.to_string());

    readiness_response(&[("database", database)])
}
