//! Resource routes. Parameterized paths resolve the kind in the handler, so one set of
//! routes serves every registered kind.

use crate::handlers::resource::{
    create, create_single, read, read_missing_id, read_segment, read_single_missing_id,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/:family", get(read_single_missing_id).post(create_single))
        .route("/:family/", get(read_single_missing_id))
        .route("/:family/:resource", get(read_segment).post(create))
        .route("/:family/:resource/", get(read_missing_id))
        .route("/:family/:resource/:id", get(read))
        .with_state(state)
}
