use crate::handlers::openapi;
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /openapi.json
pub fn docs_routes(state: AppState) -> Router {
    Router::new().route("/openapi.json", get(openapi)).with_state(state)
}
